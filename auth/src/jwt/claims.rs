use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

/// Claims carried by a session token.
///
/// Holds the identity triple (`sub`, `email`, `type`) plus the RFC 7519
/// timing claims. `jti` is random per token so two sessions issued in the
/// same second never share an encoding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (account identifier)
    pub sub: String,

    pub email: String,

    /// Account role, e.g. `BUYER`
    #[serde(rename = "type")]
    pub user_type: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// JWT ID (unique token identifier)
    pub jti: String,
}

impl SessionClaims {
    /// Build claims for a session starting at `issued_at` and lasting `ttl`.
    ///
    /// # Arguments
    /// * `subject` - Unique account identifier
    /// * `email` - Account email
    /// * `user_type` - Account role name
    /// * `issued_at` - Session start
    /// * `ttl` - Fixed session lifetime
    pub fn new(
        subject: impl ToString,
        email: impl Into<String>,
        user_type: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        let expiration = issued_at + ttl;

        Self {
            sub: subject.to_string(),
            email: email.into(),
            user_type: user_type.into(),
            iat: issued_at.timestamp(),
            exp: expiration.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Check if the session has expired at `current_timestamp`.
    ///
    /// A token is only valid while its expiration is strictly in the future.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp <= current_timestamp
    }
}
