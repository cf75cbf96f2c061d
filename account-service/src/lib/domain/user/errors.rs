use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for UserType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserTypeError {
    #[error("Unknown user type: {0}")]
    Unknown(String),
}

/// Top-level error for user store operations
#[derive(Debug, Clone, Error)]
pub enum UserError {
    #[error("Invalid user type: {0}")]
    InvalidUserType(#[from] UserTypeError),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
