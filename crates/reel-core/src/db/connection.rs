//! Database connection management
//!
//! Wraps a libSQL database handle in either local-only mode or embedded
//! replica mode. Replica mode keeps the same local file but pulls from and
//! pushes to a remote Turso database.

use crate::error::Result;
use libsql::{Builder, Connection, Database as LibSqlDatabase};
use std::path::Path;
use std::time::Duration;

use super::migrations;

const DEFAULT_SYNC_INTERVAL: Duration = Duration::from_secs(60);

/// Remote replica settings. Both the URL and token are required; sync is
/// either fully configured or absent.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Remote database URL (e.g., `libsql://your-db.turso.io`)
    pub url: String,
    /// Authentication token for the remote database
    pub auth_token: String,
    /// Automatic sync interval; `None` means manual sync only
    pub sync_interval: Option<Duration>,
}

impl SyncConfig {
    /// Create a sync configuration with the default automatic interval
    pub fn new(url: impl Into<String>, auth_token: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth_token: auth_token.into(),
            sync_interval: Some(DEFAULT_SYNC_INTERVAL),
        }
    }

    /// Set the automatic sync interval
    #[must_use]
    pub const fn with_sync_interval(mut self, interval: Duration) -> Self {
        self.sync_interval = Some(interval);
        self
    }

    /// Disable automatic sync (manual sync only)
    #[must_use]
    pub const fn without_auto_sync(mut self) -> Self {
        self.sync_interval = None;
        self
    }
}

/// Database wrapper for libSQL connections
pub struct Database {
    db: LibSqlDatabase,
    conn: Connection,
    sync_enabled: bool,
}

impl Database {
    /// Open a local-only database at the given path, creating it if it
    /// doesn't exist. Runs migrations automatically.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new_local(path.as_ref()).build().await?;
        Self::finish_setup(db, false).await
    }

    /// Open an in-memory database (useful for testing)
    pub async fn open_in_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:").build().await?;
        Self::finish_setup(db, false).await
    }

    /// Open an embedded replica that syncs with a remote Turso database.
    ///
    /// Reads are served from the local file; writes sync to the remote. The
    /// initial sync happens before migrations so they see current remote
    /// state.
    pub async fn open_with_sync(
        local_path: impl AsRef<Path>,
        sync_config: SyncConfig,
    ) -> Result<Self> {
        let mut builder =
            Builder::new_remote_replica(local_path.as_ref(), sync_config.url, sync_config.auth_token);

        if let Some(interval) = sync_config.sync_interval {
            builder = builder.sync_interval(interval);
            tracing::debug!("Automatic sync interval set to {:?}", interval);
        }

        let db = builder.build().await?;
        tracing::debug!("Performing initial sync...");
        db.sync().await?;

        Self::finish_setup(db, true).await
    }

    async fn finish_setup(db: LibSqlDatabase, sync_enabled: bool) -> Result<Self> {
        let conn = db.connect()?;
        let database = Self {
            db,
            conn,
            sync_enabled,
        };
        database.configure().await?;
        migrations::run(database.connection()).await?;
        Ok(database)
    }

    /// Configure `SQLite` for optimal performance
    async fn configure(&self) -> Result<()> {
        // Some pragmas may not work with remote replicas; ignore those errors
        self.conn
            .execute("PRAGMA journal_mode = WAL;", ())
            .await
            .ok();
        self.conn
            .execute("PRAGMA synchronous = NORMAL;", ())
            .await
            .ok();
        self.conn.execute("PRAGMA foreign_keys = ON;", ()).await?;
        Ok(())
    }

    /// Sync with the remote database (no-op for local-only databases)
    pub async fn sync(&self) -> Result<()> {
        if self.sync_enabled {
            self.db.sync().await?;
            tracing::debug!("Database synced with remote");
        }
        Ok(())
    }

    /// Check if sync is configured
    pub const fn is_sync_enabled(&self) -> bool {
        self.sync_enabled
    }

    /// Get a reference to the underlying connection
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::tempdir;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_open_in_memory() {
        let db = Database::open_in_memory().await.unwrap();
        assert!(!db.is_sync_enabled());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_local_sync_is_noop() {
        let tmp = tempdir().unwrap();
        let db = Database::open(tmp.path().join("local.db")).await.unwrap();
        db.sync().await.unwrap();
    }

    #[test]
    fn test_sync_config_intervals() {
        let config = SyncConfig::new("libsql://test.turso.io", "test-token");
        assert_eq!(config.sync_interval, Some(DEFAULT_SYNC_INTERVAL));

        let manual = config.clone().without_auto_sync();
        assert_eq!(manual.sync_interval, None);

        let fast = config.with_sync_interval(Duration::from_secs(5));
        assert_eq!(fast.sync_interval, Some(Duration::from_secs(5)));
    }

    /// Integration test for Turso sync - only runs if env vars are set
    #[tokio::test(flavor = "multi_thread")]
    #[ignore = "Requires TURSO_DATABASE_URL and TURSO_AUTH_TOKEN"]
    async fn test_sync_with_turso() {
        let url = env::var("TURSO_DATABASE_URL").expect("TURSO_DATABASE_URL must be set");
        let token = env::var("TURSO_AUTH_TOKEN").expect("TURSO_AUTH_TOKEN must be set");

        let config = SyncConfig::new(url, token);
        let tmp = tempdir().unwrap();
        let db_path = tmp.path().join("test_sync.db");

        let db = Database::open_with_sync(&db_path, config).await.unwrap();
        assert!(db.is_sync_enabled());

        let mut rows = db.connection().query("SELECT 1", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        let val: i32 = row.get(0).unwrap();
        assert_eq!(val, 1);

        db.sync().await.expect("Sync should succeed");
    }
}
