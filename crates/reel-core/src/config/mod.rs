//! Client configuration.
//!
//! Provides a unified `ClientConfig` struct used by mobile and CLI to
//! discover Supabase auth and Turso sync endpoints. Values come from the
//! environment (loaded from `.env` by the binaries before calling in here).

use serde::{Deserialize, Serialize};

use crate::db::SyncConfig;
use crate::util::{is_http_url, normalize_text_option};

/// Build-provisioned client configuration.
///
/// These values are safe-to-ship public endpoints/keys required to bootstrap
/// auth and sync. Secret credentials must never be stored here; the Turso
/// token is scoped to the user's own replica.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    #[serde(default)]
    pub supabase_url: Option<String>,
    #[serde(default)]
    pub supabase_anon_key: Option<String>,
    #[serde(default)]
    pub turso_database_url: Option<String>,
    #[serde(default)]
    pub turso_auth_token: Option<String>,
}

impl ClientConfig {
    /// Read configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            supabase_url: normalize_text_option(std::env::var("SUPABASE_URL").ok()),
            supabase_anon_key: normalize_text_option(std::env::var("SUPABASE_ANON_KEY").ok()),
            turso_database_url: normalize_text_option(std::env::var("TURSO_DATABASE_URL").ok()),
            turso_auth_token: normalize_text_option(std::env::var("TURSO_AUTH_TOKEN").ok()),
        }
    }

    /// Supabase endpoint and anon key, if both are present and the URL is
    /// well-formed
    #[must_use]
    pub fn supabase(&self) -> Option<(String, String)> {
        let url = normalize_text_option(self.supabase_url.clone())?;
        if !is_http_url(&url) {
            return None;
        }
        let key = normalize_text_option(self.supabase_anon_key.clone())?;
        Some((url.trim_end_matches('/').to_string(), key))
    }

    /// Turso sync configuration, if both URL and token are present
    #[must_use]
    pub fn sync_config(&self) -> Option<SyncConfig> {
        let url = normalize_text_option(self.turso_database_url.clone())?;
        let token = normalize_text_option(self.turso_auth_token.clone())?;
        Some(SyncConfig::new(url, token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn supabase_requires_both_values() {
        let config = ClientConfig {
            supabase_url: Some("https://project.supabase.co".to_string()),
            ..Default::default()
        };
        assert!(config.supabase().is_none());

        let config = ClientConfig {
            supabase_anon_key: Some("anon".to_string()),
            ..Default::default()
        };
        assert!(config.supabase().is_none());
    }

    #[test]
    fn supabase_rejects_non_http_url() {
        let config = ClientConfig {
            supabase_url: Some("project.supabase.co".to_string()),
            supabase_anon_key: Some("anon".to_string()),
            ..Default::default()
        };
        assert!(config.supabase().is_none());
    }

    #[test]
    fn supabase_trims_trailing_slash() {
        let config = ClientConfig {
            supabase_url: Some("https://project.supabase.co/".to_string()),
            supabase_anon_key: Some(" anon ".to_string()),
            ..Default::default()
        };
        let (url, key) = config.supabase().unwrap();
        assert_eq!(url, "https://project.supabase.co");
        assert_eq!(key, "anon");
    }

    #[test]
    fn sync_config_requires_both_values() {
        let config = ClientConfig {
            turso_database_url: Some("libsql://db.turso.io".to_string()),
            ..Default::default()
        };
        assert!(config.sync_config().is_none());

        let config = ClientConfig {
            turso_database_url: Some("libsql://db.turso.io".to_string()),
            turso_auth_token: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.sync_config().is_none());
    }

    #[test]
    fn sync_config_accepts_valid_values() {
        let config = ClientConfig {
            turso_database_url: Some(" libsql://db.turso.io ".to_string()),
            turso_auth_token: Some(" token ".to_string()),
            ..Default::default()
        };
        let sync = config.sync_config().unwrap();
        assert_eq!(sync.url, "libsql://db.turso.io");
        assert_eq!(sync.auth_token, "token");
    }
}
