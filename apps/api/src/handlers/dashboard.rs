use axum::Json;
use axum::extract::State;

use crate::dto::DashboardStatsResponse;
use crate::error::ApiResult;
use crate::state::AppState;

pub async fn dashboard_stats_handler(
    State(state): State<AppState>,
) -> ApiResult<Json<DashboardStatsResponse>> {
    let stats = state.use_cases.get_dashboard_stats.execute().await?;
    Ok(Json(DashboardStatsResponse::from(stats)))
}
