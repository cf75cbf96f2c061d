use thiserror::Error;

use crate::user::errors::UserError;

/// Failures of the login flow and of session verification.
///
/// `InvalidCredentials` deliberately covers both "no such account" and
/// "wrong password" so callers cannot tell them apart.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Please verify your email before logging in")]
    EmailNotVerified { email: String },

    #[error("Session token has expired")]
    TokenExpired,

    #[error("Session token is invalid")]
    InvalidToken,

    /// Store unreachable or server misconfigured (e.g. no signing secret).
    /// The detail is for server logs only.
    #[error("Authentication backend unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<UserError> for AuthError {
    fn from(err: UserError) -> Self {
        AuthError::StoreUnavailable(err.to_string())
    }
}
