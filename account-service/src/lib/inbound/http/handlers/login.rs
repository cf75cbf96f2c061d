use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::CookieJar;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::authentication::errors::AuthError;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::user::models::UserType;
use crate::inbound::http::router::AppState;

pub async fn login<AS: AuthServicePort>(
    State(state): State<AppState<AS>>,
    jar: CookieJar,
    body: Result<Json<LoginRequestBody>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let Json(body) = body.map_err(|e| {
        tracing::debug!(error = %e, "Unreadable login body");
        ApiError::from(AuthError::MissingCredentials)
    })?;

    let email = body.email.unwrap_or_default();
    let password = body.password.unwrap_or_default();

    let outcome = state.auth_service.login(&email, &password).await?;

    let ttl = state.auth_service.session_ttl();
    let (jar, fallback_token) = match state.session_cookie.build(outcome.token.clone(), ttl) {
        Some(cookie) => (jar.add(cookie), None),
        None => {
            tracing::warn!(
                user_id = %outcome.identity.id,
                cookie_name = %state.session_cookie.name,
                "Session cookie could not be set, returning token in body"
            );
            (jar, Some(outcome.token))
        }
    };

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            LoginResponseData {
                message: "Login successful".to_string(),
                user_type: outcome.identity.user_type,
                token: fallback_token,
            },
        ),
    ))
}

/// Login request body (raw JSON). Absent fields count as empty.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequestBody {
    email: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseData {
    pub message: String,
    pub user_type: UserType,
    /// Only present when the session cookie could not be set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
