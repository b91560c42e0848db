//! Data access layer for the mobile app.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use std::path::PathBuf;

use reel_core::config::ClientConfig;
use reel_core::store::BookmarkStore;
use reel_core::Result;

/// Open the default local mobile database, syncing with Turso when the
/// environment provides a replica URL and token.
pub async fn open_default_store() -> Result<BookmarkStore> {
    let db_path = default_db_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let config = ClientConfig::from_env();
    if let Some(sync_config) = config.sync_config() {
        BookmarkStore::open_with_sync(db_path, sync_config).await
    } else {
        BookmarkStore::open(db_path).await
    }
}

/// Build a mobile-friendly local DB path.
pub fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::data_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reel")
        .join("reel-mobile.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_db_path_ends_with_app_file() {
        let path = default_db_path();
        assert!(path.ends_with("reel/reel-mobile.db"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn in_memory_store_sync_is_disabled() {
        let store = BookmarkStore::open_in_memory().await.unwrap();
        assert!(!store.is_sync_enabled().await);
        store.sync().await.unwrap();
    }
}
