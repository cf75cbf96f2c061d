use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::CookieJar;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::authentication::ports::AuthServicePort;
use crate::inbound::http::router::AppState;

/// Clear the session cookie.
///
/// Nothing is held server-side, so this succeeds whether or not a session
/// was presented.
pub async fn logout<AS: AuthServicePort>(
    State(state): State<AppState<AS>>,
    jar: CookieJar,
) -> (CookieJar, ApiSuccess<LogoutResponseData>) {
    let had_session = state.session_cookie.token_from(&jar).is_some();
    tracing::debug!(had_session, "Logout");

    (
        jar.add(state.session_cookie.removal()),
        ApiSuccess::new(
            StatusCode::OK,
            LogoutResponseData {
                message: "Logged out successfully".to_string(),
            },
        ),
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogoutResponseData {
    pub message: String,
}
