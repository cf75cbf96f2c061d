use std::sync::Arc;

use auth::PasswordError;
use auth::PasswordHasher;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Identity;
use crate::user::ports::UserRepository;

/// Checks an email/password pair against the user store.
///
/// Read-only: one store lookup and one Argon2 comparison per call. The
/// password is never logged.
pub struct CredentialVerifier<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: PasswordHasher,
    require_email_verification: bool,
}

impl<UR> CredentialVerifier<UR>
where
    UR: UserRepository,
{
    /// Create a verifier over `repository`.
    ///
    /// # Arguments
    /// * `repository` - User store
    /// * `require_email_verification` - Reject accounts whose email is not verified
    pub fn new(repository: Arc<UR>, require_email_verification: bool) -> Self {
        Self {
            repository,
            password_hasher: PasswordHasher::new(),
            require_email_verification,
        }
    }

    /// Verify credentials and return the account identity.
    ///
    /// # Errors
    /// * `MissingCredentials` - Email or password empty (no store access)
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `EmailNotVerified` - Gate enabled and the account is unverified
    /// * `StoreUnavailable` - Store failure or unreadable stored hash
    pub async fn verify(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }

        let user = self.repository.find_by_email(email).await.map_err(|e| {
            tracing::error!(error = %e, "User lookup failed");
            AuthError::from(e)
        })?;

        let Some(user) = user else {
            self.password_hasher.verify_dummy(password).map_err(|e| {
                tracing::error!(error = %e, "Password hasher unusable");
                AuthError::StoreUnavailable(e.to_string())
            })?;
            tracing::info!("Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        };

        let password_matches = self
            .password_hasher
            .verify(password, &user.password_hash)
            .map_err(|e| match e {
                PasswordError::InvalidHash(_) | PasswordError::HashingFailed(_) => {
                    tracing::error!(user_id = %user.id, error = %e, "Stored password hash unusable");
                    AuthError::StoreUnavailable(e.to_string())
                }
            })?;

        if !password_matches {
            tracing::info!("Login rejected: invalid credentials");
            return Err(AuthError::InvalidCredentials);
        }

        if self.require_email_verification && !user.email_verified {
            tracing::info!(user_id = %user.id, "Login rejected: email not verified");
            return Err(AuthError::EmailNotVerified { email: user.email });
        }

        Ok(Identity::from(&user))
    }
}
