use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use hrdesk_core::AppError;
use hrdesk_domain::CandidateId;

use crate::dto::{CandidateResponse, RegisterCandidateRequest};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_candidates_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<CandidateResponse>>> {
    let candidates = state
        .use_cases
        .list_candidates
        .execute()
        .await?
        .into_iter()
        .map(CandidateResponse::from)
        .collect();

    Ok(Json(candidates))
}

pub async fn register_candidate_handler(
    State(state): State<AppState>,
    Json(payload): Json<RegisterCandidateRequest>,
) -> ApiResult<(StatusCode, Json<CandidateResponse>)> {
    let candidate = state
        .use_cases
        .register_candidate
        .execute(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(CandidateResponse::from(candidate))))
}

pub async fn get_candidate_handler(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> ApiResult<Json<CandidateResponse>> {
    let candidate_id = CandidateId::parse(candidate_id.as_str())?;
    let candidate = state
        .use_cases
        .get_candidate
        .execute(candidate_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("candidate '{candidate_id}' not found")))?;

    Ok(Json(CandidateResponse::from(candidate)))
}

pub async fn hire_candidate_handler(
    State(state): State<AppState>,
    Path(candidate_id): Path<String>,
) -> ApiResult<Json<CandidateResponse>> {
    let candidate_id = CandidateId::parse(candidate_id.as_str())?;
    let candidate = state.use_cases.hire_candidate.execute(candidate_id).await?;

    Ok(Json(CandidateResponse::from(candidate)))
}
