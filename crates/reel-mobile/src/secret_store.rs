//! Secure storage for the persisted Supabase session.
//!
//! The session blob is the only secret this app keeps on device. On Android
//! it lives in the platform keystore; elsewhere (tests, desktop dev builds)
//! an in-memory mock store stands in.

use std::sync::{Arc, OnceLock};

use keyring_core::{CredentialStore, Entry, Error as KeyringError};

const SERVICE_NAME: &str = "reel-mobile";
const SESSION_SLOT: &str = "supabase_session";

type SecretResult<T> = Result<T, String>;

static STORE_INIT: OnceLock<Result<(), String>> = OnceLock::new();

/// Persist the serialized session, replacing any previous one.
pub fn store_session_blob(blob: &str) -> SecretResult<()> {
    let blob = blob.trim();
    if blob.is_empty() {
        return Err("session blob must not be empty".to_string());
    }

    session_entry()?.set_password(blob).map_err(describe_error)
}

/// Load the serialized session, or `None` when no session is stored.
pub fn load_session_blob() -> SecretResult<Option<String>> {
    match session_entry()?.get_password() {
        Ok(blob) => {
            let blob = blob.trim();
            Ok(if blob.is_empty() {
                None
            } else {
                Some(blob.to_string())
            })
        }
        Err(KeyringError::NoEntry) => Ok(None),
        Err(error) => Err(describe_error(error)),
    }
}

/// Remove the stored session. Clearing an absent session is not an error.
pub fn clear_session_blob() -> SecretResult<()> {
    match session_entry()?.delete_credential() {
        Ok(()) | Err(KeyringError::NoEntry) => Ok(()),
        Err(error) => Err(describe_error(error)),
    }
}

fn session_entry() -> SecretResult<Entry> {
    STORE_INIT.get_or_init(initialize_store).clone()?;
    Entry::new(SERVICE_NAME, SESSION_SLOT).map_err(describe_error)
}

#[cfg(target_os = "android")]
fn initialize_store() -> SecretResult<()> {
    let store: Arc<CredentialStore> = android_native_keyring_store::Store::new()
        .map_err(|error| format!("failed to initialize Android secure store: {error}"))?;
    keyring_core::set_default_store(store);
    Ok(())
}

#[cfg(not(target_os = "android"))]
fn initialize_store() -> SecretResult<()> {
    let store: Arc<CredentialStore> = keyring_core::mock::Store::new()
        .map_err(|error| format!("failed to initialize mock secure store: {error}"))?;
    keyring_core::set_default_store(store);
    Ok(())
}

fn describe_error(error: KeyringError) -> String {
    match error {
        KeyringError::NoDefaultStore => "secure store is not initialized".to_string(),
        KeyringError::NoEntry => "session is not stored".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_blob_roundtrip() {
        clear_session_blob().unwrap();
        assert_eq!(load_session_blob().unwrap(), None);

        store_session_blob(" {\"access_token\":\"a\"} ").unwrap();
        assert_eq!(
            load_session_blob().unwrap().as_deref(),
            Some("{\"access_token\":\"a\"}")
        );

        clear_session_blob().unwrap();
        assert_eq!(load_session_blob().unwrap(), None);
    }

    #[test]
    fn empty_session_blob_is_rejected() {
        let error = store_session_blob("   ").unwrap_err();
        assert!(error.contains("must not be empty"));
    }
}
