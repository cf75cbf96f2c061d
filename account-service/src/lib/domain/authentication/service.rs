use std::sync::Arc;

use async_trait::async_trait;
use chrono::Duration;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Identity;
use crate::domain::authentication::models::LoginOutcome;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::authentication::session::SessionIssuer;
use crate::domain::authentication::verifier::CredentialVerifier;
use crate::user::ports::UserRepository;

/// Domain service implementation for login and session checks.
///
/// Owns its store handle and signing key; built once at startup and shared
/// by reference with the request handlers.
pub struct AuthService<UR>
where
    UR: UserRepository,
{
    verifier: CredentialVerifier<UR>,
    issuer: SessionIssuer,
}

impl<UR> AuthService<UR>
where
    UR: UserRepository,
{
    /// Create a new auth service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - User store
    /// * `issuer` - Session token issuer
    /// * `require_email_verification` - Reject logins from unverified accounts
    pub fn new(repository: Arc<UR>, issuer: SessionIssuer, require_email_verification: bool) -> Self {
        Self {
            verifier: CredentialVerifier::new(repository, require_email_verification),
            issuer,
        }
    }
}

#[async_trait]
impl<UR> AuthServicePort for AuthService<UR>
where
    UR: UserRepository,
{
    async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        let identity = self.verifier.verify(email, password).await?;
        let token = self.issuer.issue(&identity)?;

        tracing::info!(
            user_id = %identity.id,
            user_type = %identity.user_type,
            "Login successful"
        );

        Ok(LoginOutcome { token, identity })
    }

    fn authenticate(&self, token: &str) -> Result<Identity, AuthError> {
        self.issuer.verify(token)
    }

    fn session_ttl(&self) -> Duration {
        self.issuer.ttl()
    }
}

#[cfg(test)]
mod tests {
    use auth::PasswordHasher;
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::User;
    use crate::domain::user::models::UserId;
    use crate::domain::user::models::UserType;
    use crate::user::errors::UserError;

    const SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn alice() -> User {
        User {
            id: UserId::new(),
            email: "alice@example.com".to_string(),
            password_hash: PasswordHasher::new().hash("correct-horse").unwrap(),
            user_type: UserType::Buyer,
            email_verified: false,
            created_at: Utc::now(),
        }
    }

    /// Store holding only `user`, expecting exactly `lookups` lookups.
    fn repository_with(user: User, lookups: usize) -> MockTestUserRepository {
        let mut repository = MockTestUserRepository::new();
        repository
            .expect_find_by_email()
            .times(lookups)
            .returning(move |email| Ok((user.email == email).then(|| user.clone())));
        repository
    }

    fn service(
        repository: MockTestUserRepository,
        secret: Option<&str>,
    ) -> AuthService<MockTestUserRepository> {
        AuthService::new(
            Arc::new(repository),
            SessionIssuer::new(secret, Duration::hours(24)),
            false,
        )
    }

    #[tokio::test]
    async fn test_login_token_authenticates_as_same_identity() {
        let user = alice();
        let expected = Identity::from(&user);
        let service = service(repository_with(user, 1), Some(SECRET));

        let outcome = service
            .login("alice@example.com", "correct-horse")
            .await
            .expect("Login failed");

        assert_eq!(outcome.identity, expected);
        assert_eq!(service.authenticate(&outcome.token), Ok(expected));
    }

    #[tokio::test]
    async fn test_repeated_login_issues_independent_tokens() {
        let service = service(repository_with(alice(), 2), Some(SECRET));

        let first = service
            .login("alice@example.com", "correct-horse")
            .await
            .unwrap();
        let second = service
            .login("alice@example.com", "correct-horse")
            .await
            .unwrap();

        assert_ne!(first.token, second.token);
        assert!(service.authenticate(&first.token).is_ok());
        assert!(service.authenticate(&second.token).is_ok());
    }

    #[tokio::test]
    async fn test_missing_credentials_never_reach_store() {
        let service = service(repository_with(alice(), 0), Some(SECRET));

        assert_eq!(
            service.login("", "x").await,
            Err(AuthError::MissingCredentials)
        );
        assert_eq!(
            service.login("x", "").await,
            Err(AuthError::MissingCredentials)
        );
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_match() {
        let service = service(repository_with(alice(), 2), Some(SECRET));

        let wrong_password = service.login("alice@example.com", "wrong").await;
        let unknown_email = service.login("bob@nowhere.com", "anything").await;

        assert_eq!(wrong_password, Err(AuthError::InvalidCredentials));
        assert_eq!(wrong_password, unknown_email);
    }

    #[tokio::test]
    async fn test_login_without_secret_is_store_unavailable() {
        let service = service(repository_with(alice(), 1), None);

        let result = service.login("alice@example.com", "correct-horse").await;
        assert!(matches!(result, Err(AuthError::StoreUnavailable(_))));
    }

    #[test]
    fn test_session_ttl_comes_from_issuer() {
        let service = service(repository_with(alice(), 0), Some(SECRET));
        assert_eq!(service.session_ttl(), Duration::hours(24));
    }
}
