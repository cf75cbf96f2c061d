use auth::JwtHandler;
use auth::SessionClaims;
use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Identity;
use crate::domain::user::models::UserId;
use crate::domain::user::models::UserType;

/// Creates and validates signed, fixed-lifetime session tokens.
///
/// Stateless: a token stays valid until its embedded expiration, there is no
/// revocation list. A missing secret is not replaced by a default; every call
/// fails instead.
pub struct SessionIssuer {
    jwt_handler: Option<JwtHandler>,
    ttl: Duration,
}

impl SessionIssuer {
    /// Create an issuer.
    ///
    /// # Arguments
    /// * `secret` - Signing secret from server configuration (`None` or empty
    ///   leaves the issuer unusable)
    /// * `ttl` - Session lifetime, counted from issuance
    pub fn new(secret: Option<&str>, ttl: Duration) -> Self {
        let jwt_handler = secret
            .filter(|secret| !secret.is_empty())
            .map(|secret| JwtHandler::new(secret.as_bytes()));

        Self { jwt_handler, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token for `identity`, valid from now for the configured ttl.
    pub fn issue(&self, identity: &Identity) -> Result<String, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// # Errors
    /// * `StoreUnavailable` - No signing secret configured, or signing failed
    pub fn issue_at(&self, identity: &Identity, now: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = SessionClaims::new(
            identity.id,
            identity.email.clone(),
            identity.user_type.as_str(),
            now,
            self.ttl,
        );

        self.handler()?.encode(&claims).map_err(|e| {
            tracing::error!(error = %e, "Session token signing failed");
            AuthError::StoreUnavailable(e.to_string())
        })
    }

    /// Verify a presented token against the current time.
    pub fn verify(&self, token: &str) -> Result<Identity, AuthError> {
        self.verify_at(token, Utc::now())
    }

    /// Verify a presented token as if the current time were `now`.
    ///
    /// # Errors
    /// * `InvalidToken` - Signature mismatch, malformed token or unreadable claims
    /// * `TokenExpired` - Expiration is not after `now`
    /// * `StoreUnavailable` - No signing secret configured
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<Identity, AuthError> {
        let claims: SessionClaims = self
            .handler()?
            .decode(token)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.is_expired(now.timestamp()) {
            return Err(AuthError::TokenExpired);
        }

        let id = UserId::from_string(&claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let user_type = claims
            .user_type
            .parse::<UserType>()
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Identity {
            id,
            email: claims.email,
            user_type,
        })
    }

    fn handler(&self) -> Result<&JwtHandler, AuthError> {
        self.jwt_handler.as_ref().ok_or_else(|| {
            tracing::error!("Session signing secret is not configured");
            AuthError::StoreUnavailable("session signing secret is not configured".to_string())
        })
    }
}
