use std::sync::Arc;

use hrdesk_core::AppResult;
use hrdesk_domain::DashboardStats;

use crate::DashboardRepository;

/// Returns the dashboard figures.
#[derive(Clone)]
pub struct GetDashboardStatsUseCase {
    repository: Arc<dyn DashboardRepository>,
}

impl GetDashboardStatsUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }

    /// Loads current statistics.
    pub async fn execute(&self) -> AppResult<DashboardStats> {
        self.repository.get_stats().await
    }
}
