use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::headers::HeaderMapExt;

use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::models::Identity;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::UNAUTHENTICATED;
use crate::inbound::http::router::AppState;

/// Extension type to store the authenticated identity in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub Identity);

/// Middleware that validates the session token and adds the identity to request extensions.
///
/// The token is read from `Authorization: Bearer <token>` first, then from
/// the session cookie.
pub async fn require_session<AS: AuthServicePort>(
    State(state): State<AppState<AS>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_token(&req, &state).ok_or_else(|| {
        tracing::debug!("No session token presented");
        ApiError::Unauthorized(UNAUTHENTICATED.to_string())
    })?;

    let identity = state.auth_service.authenticate(&token).map_err(|e| {
        match &e {
            AuthError::TokenExpired => tracing::debug!("Session token expired"),
            AuthError::InvalidToken => tracing::warn!("Session token rejected"),
            other => tracing::error!(error = %other, "Session verification unavailable"),
        }
        ApiError::from(e)
    })?;

    req.extensions_mut().insert(AuthenticatedUser(identity));

    Ok(next.run(req).await)
}

fn extract_token<AS: AuthServicePort>(req: &Request, state: &AppState<AS>) -> Option<String> {
    req.headers()
        .typed_get::<Authorization<Bearer>>()
        .map(|Authorization(bearer)| bearer.token().to_owned())
        .or_else(|| {
            let jar = CookieJar::from_headers(req.headers());
            state.session_cookie.token_from(&jar)
        })
}
