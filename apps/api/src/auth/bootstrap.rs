use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use hrdesk_core::{AppError, Role, SessionUser};
use tower_sessions::Session;
use tracing::info;

use crate::dto::BootstrapSessionRequest;
use crate::error::ApiResult;
use crate::state::AppState;

use super::SESSION_USER_KEY;

/// Issues a session for a trusted subject and role.
pub async fn bootstrap_handler(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<BootstrapSessionRequest>,
) -> ApiResult<StatusCode> {
    if payload.token != state.bootstrap_token {
        return Err(AppError::Unauthorized("invalid bootstrap token".to_owned()).into());
    }

    let subject = payload.subject.trim();
    if subject.is_empty() {
        return Err(AppError::Validation("subject must not be empty".to_owned()).into());
    }

    let role = Role::from_transport(payload.role.as_str())?;
    let user = SessionUser::new(
        subject,
        role,
        payload
            .display_name
            .filter(|value| !value.trim().is_empty()),
    );

    session
        .cycle_id()
        .await
        .map_err(|error| AppError::Internal(format!("failed to cycle session id: {error}")))?;

    session
        .insert(SESSION_USER_KEY, &user)
        .await
        .map_err(|error| AppError::Internal(format!("failed to persist session user: {error}")))?;

    info!(subject = user.id(), role = %user.role(), "session bootstrapped");

    Ok(StatusCode::NO_CONTENT)
}
