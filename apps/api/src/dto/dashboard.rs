use hrdesk_domain::DashboardStats;
use serde::Serialize;
use ts_rs::TS;

/// Landing dashboard figures.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/dashboard-stats-response.ts"
)]
pub struct DashboardStatsResponse {
    #[ts(type = "number")]
    pub total_requests: u64,
    #[ts(type = "number")]
    pub pending_requests: u64,
    #[ts(type = "number")]
    pub approved_requests: u64,
    #[ts(type = "number")]
    pub signed_contracts: u64,
    /// Mean days from application to hire.
    pub average_time_to_hire: f64,
}

impl From<DashboardStats> for DashboardStatsResponse {
    fn from(stats: DashboardStats) -> Self {
        Self {
            total_requests: stats.total_requests,
            pending_requests: stats.pending_requests,
            approved_requests: stats.approved_requests,
            signed_contracts: stats.signed_contracts,
            average_time_to_hire: stats.average_time_to_hire,
        }
    }
}
