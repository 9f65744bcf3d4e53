use async_trait::async_trait;
use hrdesk_core::AppResult;
use hrdesk_domain::DashboardStats;

/// Read-model port for dashboard figures.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Computes current dashboard statistics.
    async fn get_stats(&self) -> AppResult<DashboardStats>;
}
