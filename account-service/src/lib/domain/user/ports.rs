use async_trait::async_trait;

use crate::domain::user::models::User;
use crate::user::errors::UserError;

/// Read access to the user store.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Retrieve user by email address.
    ///
    /// Matches the stored email exactly.
    ///
    /// # Arguments
    /// * `email` - Email address string
    ///
    /// # Returns
    /// Optional user entity (None if not found)
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    /// * `InvalidUserType` - Stored row carries an unknown role
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
