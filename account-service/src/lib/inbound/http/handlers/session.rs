use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use super::ApiSuccess;
use crate::domain::user::models::UserType;
use crate::inbound::http::middleware::AuthenticatedUser;

/// Describe the session the request was authenticated with.
pub async fn current_session(
    Extension(AuthenticatedUser(identity)): Extension<AuthenticatedUser>,
) -> ApiSuccess<SessionResponseData> {
    ApiSuccess::new(
        StatusCode::OK,
        SessionResponseData {
            id: identity.id.to_string(),
            email: identity.email,
            user_type: identity.user_type,
            dashboard: identity.user_type.dashboard_path().to_string(),
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponseData {
    pub id: String,
    pub email: String,
    pub user_type: UserType,
    pub dashboard: String,
}
