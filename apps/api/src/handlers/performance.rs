use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use chrono::Utc;

use crate::dto::{OpenPerformanceCycleRequest, PerformanceCycleResponse};
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn list_performance_cycles_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PerformanceCycleResponse>>> {
    let today = Utc::now().date_naive();
    let cycles = state
        .use_cases
        .list_performance_cycles
        .execute()
        .await?
        .iter()
        .map(|cycle| PerformanceCycleResponse::from_cycle(cycle, today))
        .collect();

    Ok(Json(cycles))
}

pub async fn open_performance_cycle_handler(
    State(state): State<AppState>,
    Json(payload): Json<OpenPerformanceCycleRequest>,
) -> ApiResult<(StatusCode, Json<PerformanceCycleResponse>)> {
    let cycle = state
        .use_cases
        .open_performance_cycle
        .execute(payload.try_into()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(PerformanceCycleResponse::from_cycle(
            &cycle,
            Utc::now().date_naive(),
        )),
    ))
}
