use async_trait::async_trait;
use chrono::Duration;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Identity;
use crate::domain::authentication::models::LoginOutcome;

/// Port for the login and session operations exposed to inbound adapters.
#[async_trait]
pub trait AuthServicePort: Send + Sync + 'static {
    /// Check credentials and issue a new session token.
    ///
    /// Every successful call yields an independent token; earlier sessions
    /// stay valid.
    ///
    /// # Arguments
    /// * `email` - Account email, matched exactly
    /// * `password` - Plaintext password
    ///
    /// # Returns
    /// Signed token together with the verified identity
    ///
    /// # Errors
    /// * `MissingCredentials` - Email or password is empty
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `EmailNotVerified` - Verification gate enabled and not satisfied
    /// * `StoreUnavailable` - Store failure or missing signing secret
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError>;

    /// Verify a presented session token.
    ///
    /// CPU only; never touches the store.
    ///
    /// # Errors
    /// * `InvalidToken` - Bad signature or malformed token
    /// * `TokenExpired` - Signature valid but expiration has passed
    /// * `StoreUnavailable` - Missing signing secret
    fn authenticate(&self, token: &str) -> Result<Identity, AuthError>;

    /// Fixed lifetime of issued sessions.
    fn session_ttl(&self) -> Duration;
}
