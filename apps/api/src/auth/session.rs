use axum::Json;
use axum::extract::Extension;
use axum::http::StatusCode;
use hrdesk_core::{AppError, SessionUser};
use tower_sessions::Session;
use tracing::info;

use crate::dto::SessionUserResponse;
use crate::error::ApiResult;

use super::SESSION_USER_KEY;

pub async fn logout_handler(session: Session) -> ApiResult<StatusCode> {
    let subject = session
        .get::<SessionUser>(SESSION_USER_KEY)
        .await
        .map_err(|error| AppError::Internal(format!("failed to read session user: {error}")))?
        .map(|user| user.id().to_owned());

    session
        .delete()
        .await
        .map_err(|error| AppError::Internal(format!("failed to delete session: {error}")))?;

    if let Some(subject) = subject {
        info!(subject = subject.as_str(), "session closed");
    }

    Ok(StatusCode::NO_CONTENT)
}

pub async fn me_handler(Extension(user): Extension<SessionUser>) -> Json<SessionUserResponse> {
    Json(SessionUserResponse::from(user))
}
