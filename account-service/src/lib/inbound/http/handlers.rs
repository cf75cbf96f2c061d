use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde::Serialize;

use crate::domain::authentication::errors::AuthError;

pub mod login;
pub mod logout;
pub mod session;

/// Client-facing message for every 401.
pub const UNAUTHENTICATED: &str = "Unauthenticated";

/// Client-facing message for every 500; the detail stays in server logs.
pub const SERVER_CONFIGURATION_ERROR: &str = "Server configuration error";

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<T>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(data))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    BadRequest(String),
    Unauthorized(String),
    /// Password was right but the email is not verified yet.
    Forbidden {
        message: String,
        email: String,
    },
    InternalServerError {
        details: String,
    },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                serde_json::json!({ "error": message }),
            ),
            ApiError::Forbidden { message, email } => (
                StatusCode::FORBIDDEN,
                serde_json::json!({
                    "error": message,
                    "needsVerification": true,
                    "email": email,
                }),
            ),
            ApiError::InternalServerError { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "error": SERVER_CONFIGURATION_ERROR,
                    "details": details,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingCredentials | AuthError::InvalidCredentials => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::EmailNotVerified { ref email } => ApiError::Forbidden {
                email: email.clone(),
                message: err.to_string(),
            },
            AuthError::TokenExpired | AuthError::InvalidToken => {
                ApiError::Unauthorized(UNAUTHENTICATED.to_string())
            }
            AuthError::StoreUnavailable(detail) => {
                tracing::error!(detail = %detail, "Authentication backend unavailable");
                ApiError::InternalServerError {
                    details: "Authentication backend unavailable".to_string(),
                }
            }
        }
    }
}
