//! Supabase authentication service with secure session storage for mobile.
#![cfg_attr(not(target_os = "android"), allow(dead_code))]

use crate::secret_store;

use reel_core::auth::{
    resolve_optional_supabase_config, AuthResult, SessionPersistence, SupabaseAuthClient,
};
#[allow(unused_imports)]
pub use reel_core::auth::{AuthError, AuthErrorKind, AuthSession, AuthUser, SignUpOutcome};

#[derive(Debug, Clone, Copy, Default)]
struct SessionStore;

impl SessionPersistence for SessionStore {
    fn load_session(&self) -> AuthResult<Option<AuthSession>> {
        match secret_store::load_session_blob() {
            Ok(Some(blob)) => Ok(Some(serde_json::from_str(&blob)?)),
            Ok(None) => Ok(None),
            Err(error) => Err(AuthError::SecureStorage(error)),
        }
    }

    fn save_session(&self, session: &AuthSession) -> AuthResult<()> {
        let blob = serde_json::to_string(session)?;
        secret_store::store_session_blob(&blob).map_err(AuthError::SecureStorage)
    }

    fn clear_session(&self) -> AuthResult<()> {
        secret_store::clear_session_blob().map_err(AuthError::SecureStorage)
    }
}

#[derive(Clone)]
pub struct SupabaseAuthService {
    inner: SupabaseAuthClient<SessionStore>,
}

impl SupabaseAuthService {
    pub fn new_from_env() -> AuthResult<Option<Self>> {
        let Some((url, anon_key)) = resolve_optional_supabase_config(
            std::env::var("SUPABASE_URL").ok(),
            std::env::var("SUPABASE_ANON_KEY").ok(),
        )?
        else {
            return Ok(None);
        };

        Ok(Some(Self::new(url, anon_key)?))
    }

    pub fn new(url: impl AsRef<str>, anon_key: impl Into<String>) -> AuthResult<Self> {
        Ok(Self {
            inner: SupabaseAuthClient::new(url, anon_key, SessionStore)?,
        })
    }

    pub async fn restore_session(&self) -> AuthResult<Option<AuthSession>> {
        self.inner.restore_session().await
    }

    pub async fn sign_up(&self, email: &str, password: &str) -> AuthResult<SignUpOutcome> {
        self.inner.sign_up(email, password).await
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> AuthResult<AuthSession> {
        self.inner.sign_in(email, password).await
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> AuthResult<AuthSession> {
        self.inner.refresh_session(refresh_token).await
    }

    pub async fn sign_out(&self, access_token: &str) -> AuthResult<()> {
        self.inner.sign_out(access_token).await
    }
}
