use async_trait::async_trait;
use chrono::NaiveDate;
use hrdesk_core::AppResult;
use hrdesk_domain::PerformanceCycle;

/// Input payload for opening a performance cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenPerformanceCycleInput {
    /// Cycle name.
    pub name: String,
    /// First day of the cycle.
    pub starts_on: NaiveDate,
    /// Last day of the cycle.
    pub ends_on: NaiveDate,
}

/// Repository port for performance review cycles.
#[async_trait]
pub trait PerformanceCycleRepository: Send + Sync {
    /// Inserts a new cycle. Fails with `Conflict` when the name is taken.
    async fn save(&self, cycle: PerformanceCycle) -> AppResult<()>;

    /// Lists cycles, latest start first.
    async fn list(&self) -> AppResult<Vec<PerformanceCycle>>;
}
