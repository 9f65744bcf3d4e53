use std::sync::Arc;

use hrdesk_core::AppResult;
use hrdesk_domain::PerformanceCycle;

use crate::{OpenPerformanceCycleInput, PerformanceCycleRepository};

/// Schedules a performance review cycle.
#[derive(Clone)]
pub struct OpenPerformanceCycleUseCase {
    repository: Arc<dyn PerformanceCycleRepository>,
}

impl OpenPerformanceCycleUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn PerformanceCycleRepository>) -> Self {
        Self { repository }
    }

    /// Validates the window and stores the cycle.
    pub async fn execute(&self, input: OpenPerformanceCycleInput) -> AppResult<PerformanceCycle> {
        let cycle = PerformanceCycle::new(input.name, input.starts_on, input.ends_on)?;
        self.repository.save(cycle.clone()).await?;
        Ok(cycle)
    }
}

/// Lists performance review cycles.
#[derive(Clone)]
pub struct ListPerformanceCyclesUseCase {
    repository: Arc<dyn PerformanceCycleRepository>,
}

impl ListPerformanceCyclesUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn PerformanceCycleRepository>) -> Self {
        Self { repository }
    }

    /// Returns every cycle.
    pub async fn execute(&self) -> AppResult<Vec<PerformanceCycle>> {
        self.repository.list().await
    }
}
