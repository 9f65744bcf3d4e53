use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use hrdesk_application::HrRequestScope;
use hrdesk_core::{AppError, SessionUser};
use hrdesk_domain::HrRequestId;

use crate::dto::{HrRequestResponse, ListHrRequestsQuery, SubmitHrRequestRequest};
use crate::error::ApiResult;
use crate::route_access::is_reviewer;
use crate::state::AppState;

pub async fn list_requests_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Query(query): Query<ListHrRequestsQuery>,
) -> ApiResult<Json<Vec<HrRequestResponse>>> {
    let scope = if is_reviewer(user.role()) && !query.mine {
        HrRequestScope::All
    } else {
        HrRequestScope::RequestedBy(user.id().to_owned())
    };

    let requests = state
        .use_cases
        .list_requests
        .execute(scope)
        .await?
        .into_iter()
        .map(HrRequestResponse::from)
        .collect();

    Ok(Json(requests))
}

pub async fn submit_request_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Json(payload): Json<SubmitHrRequestRequest>,
) -> ApiResult<(StatusCode, Json<HrRequestResponse>)> {
    let request = state
        .use_cases
        .submit_request
        .execute(&user, payload.try_into()?)
        .await?;

    Ok((StatusCode::CREATED, Json(HrRequestResponse::from(request))))
}

pub async fn get_request_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<HrRequestResponse>> {
    let request_id = HrRequestId::parse(request_id.as_str())?;
    let request = state
        .use_cases
        .get_request
        .execute(request_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("hr request '{request_id}' not found")))?;

    if !is_reviewer(user.role()) && request.requester().as_str() != user.id() {
        return Err(AppError::Forbidden(format!(
            "hr request '{request_id}' belongs to another employee"
        ))
        .into());
    }

    Ok(Json(HrRequestResponse::from(request)))
}
