use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use hrdesk_core::SessionUser;
use hrdesk_domain::HrRequestId;

use crate::dto::{ApprovalResponse, RecordApprovalRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_approvals_handler(
    State(state): State<AppState>,
    Path(request_id): Path<String>,
) -> ApiResult<Json<Vec<ApprovalResponse>>> {
    let request_id = HrRequestId::parse(request_id.as_str())?;
    let approvals = state
        .use_cases
        .list_approvals
        .execute(request_id)
        .await?
        .into_iter()
        .map(ApprovalResponse::from)
        .collect();

    Ok(Json(approvals))
}

pub async fn record_approval_handler(
    State(state): State<AppState>,
    Extension(user): Extension<SessionUser>,
    Path(request_id): Path<String>,
    Json(payload): Json<RecordApprovalRequest>,
) -> ApiResult<(StatusCode, Json<ApprovalResponse>)> {
    let request_id = HrRequestId::parse(request_id.as_str())?;
    let approval = state
        .use_cases
        .record_approval
        .execute(&user, payload.into_input(request_id)?)
        .await?;

    Ok((StatusCode::CREATED, Json(ApprovalResponse::from(approval))))
}
