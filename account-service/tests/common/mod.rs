use std::collections::HashMap;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use account_service::domain::authentication::service::AuthService;
use account_service::domain::authentication::session::SessionIssuer;
use account_service::domain::user::errors::UserError;
use account_service::domain::user::models::User;
use account_service::domain::user::models::UserId;
use account_service::domain::user::models::UserType;
use account_service::domain::user::ports::UserRepository;
use account_service::inbound::http::cookie::SessionCookie;
use account_service::inbound::http::router::create_router;
use async_trait::async_trait;
use auth::PasswordHasher;
use chrono::Duration;
use chrono::Utc;

pub const TEST_SECRET: &str = "test-secret-key-for-jwt-signing-at-least-32-bytes";

/// In-memory user store that counts lookups and can simulate an outage.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: HashMap<String, User>,
    lookups: AtomicUsize,
    unavailable: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn with_user(
        mut self,
        email: &str,
        password: &str,
        user_type: UserType,
        email_verified: bool,
    ) -> Self {
        let password_hash = PasswordHasher::new()
            .hash(password)
            .expect("Failed to hash test password");

        self.users.insert(
            email.to_string(),
            User {
                id: UserId::new(),
                email: email.to_string(),
                password_hash,
                user_type,
                email_verified,
                created_at: Utc::now(),
            },
        );
        self
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn user(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        if self.unavailable {
            return Err(UserError::DatabaseError(
                "connection to 10.0.0.5:5432 refused".to_string(),
            ));
        }

        Ok(self.users.get(email).cloned())
    }
}

/// Knobs for a spawned test server.
pub struct TestOptions {
    pub secret: Option<&'static str>,
    pub require_email_verification: bool,
    pub cookie_name: &'static str,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            secret: Some(TEST_SECRET),
            require_email_verification: false,
            cookie_name: "token",
        }
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryUserRepository>,
    pub issuer: SessionIssuer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application with alice@example.com (BUYER) and
    /// sam@lensworks.com (SUPPLIER, unverified) registered.
    pub async fn spawn() -> Self {
        Self::spawn_with(seeded_repository(), TestOptions::default()).await
    }

    /// Spawn the application in a background task over `repository`
    pub async fn spawn_with(repository: InMemoryUserRepository, options: TestOptions) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(repository);
        let auth_service = Arc::new(AuthService::new(
            Arc::clone(&repository),
            SessionIssuer::new(options.secret, Duration::hours(24)),
            options.require_email_verification,
        ));

        let router = create_router(auth_service, SessionCookie::new(options.cookie_name, false));

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            issuer: SessionIssuer::new(Some(TEST_SECRET), Duration::hours(24)),
            api_client: reqwest::Client::builder()
                .cookie_store(true)
                .build()
                .expect("Failed to create reqwest client"),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token and no cookies
    pub fn get_with_bearer(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        reqwest::Client::new()
            .get(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Log in and return the raw response
    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post("/api/auth/login")
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn seeded_repository() -> InMemoryUserRepository {
    InMemoryUserRepository::new()
        .with_user("alice@example.com", "correct-horse", UserType::Buyer, true)
        .with_user("sam@lensworks.com", "frames-4-all", UserType::Supplier, false)
}

/// Value of the `token` cookie set by `response`, if any.
pub fn session_cookie(response: &reqwest::Response) -> Option<String> {
    response
        .cookies()
        .find(|cookie| cookie.name() == "token")
        .map(|cookie| cookie.value().to_string())
}
