use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;
use uuid::Uuid;

use crate::user::errors::UserIdError;
use crate::user::errors::UserTypeError;

/// Marketplace account as stored by the user store.
///
/// Rows are created by registration; this service only reads them.
#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub user_type: UserType,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// User unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a user ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, UserIdError> {
        Uuid::parse_str(s)
            .map(UserId)
            .map_err(|e| UserIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Account role.
///
/// Decides where the client lands after login. Serialized in upper case,
/// matching the stored column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserType {
    Buyer,
    Supplier,
    Admin,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Buyer => "BUYER",
            UserType::Supplier => "SUPPLIER",
            UserType::Admin => "ADMIN",
        }
    }

    /// Dashboard the client is sent to after a successful login.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            UserType::Buyer => "/dashboard/buyer",
            UserType::Supplier => "/dashboard/supplier",
            UserType::Admin => "/dashboard/admin",
        }
    }
}

impl FromStr for UserType {
    type Err = UserTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BUYER" => Ok(UserType::Buyer),
            "SUPPLIER" => Ok(UserType::Supplier),
            "ADMIN" => Ok(UserType::Admin),
            other => Err(UserTypeError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
