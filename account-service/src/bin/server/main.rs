use std::sync::Arc;

use account_service::config::Config;
use account_service::domain::authentication::service::AuthService;
use account_service::domain::authentication::session::SessionIssuer;
use account_service::inbound::http::cookie::SessionCookie;
use account_service::inbound::http::router::create_router;
use account_service::outbound::repositories::PostgresUserRepository;
use anyhow::Context;
use chrono::Duration;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "account_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "account-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load().context("Failed to load configuration")?;

    let secret = config
        .jwt
        .secret()
        .context("jwt.secret is not configured (set JWT__SECRET)")?;

    tracing::info!(
        http_port = config.server.http_port,
        session_hours = config.jwt.expiration_hours,
        require_email_verification = config.auth.require_email_verification,
        cookie_name = %config.cookie.name,
        cookie_secure = config.cookie.secure,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await
        .context("Failed to connect to the user store")?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool));
    let session_issuer = SessionIssuer::new(
        Some(secret),
        Duration::hours(config.jwt.expiration_hours),
    );
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        session_issuer,
        config.auth.require_email_verification,
    ));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let http_application = create_router(
        auth_service,
        SessionCookie::new(config.cookie.name.clone(), config.cookie.secure),
    );

    if let Err(e) = axum::serve(http_listener, http_application).await {
        tracing::error!(error = %e, "Server error");
        return Err(e.into());
    }

    tracing::info!("Server exited successfully");
    Ok(())
}
