use std::sync::Arc;

use chrono::Utc;
use hrdesk_core::{AppResult, SessionUser};
use hrdesk_domain::{HrRequest, HrRequestId};

use crate::{HrRequestRepository, HrRequestScope, SubmitHrRequestInput};

/// Raises a request on behalf of the signed-in user.
#[derive(Clone)]
pub struct SubmitHrRequestUseCase {
    repository: Arc<dyn HrRequestRepository>,
}

impl SubmitHrRequestUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn HrRequestRepository>) -> Self {
        Self { repository }
    }

    /// Validates the input and stores a pending request.
    pub async fn execute(
        &self,
        requester: &SessionUser,
        input: SubmitHrRequestInput,
    ) -> AppResult<HrRequest> {
        let request = HrRequest::new(
            requester.id(),
            input.kind,
            input.title,
            input.description,
            Utc::now(),
        )?;
        self.repository.save(request.clone()).await?;
        Ok(request)
    }
}

/// Looks up one request.
#[derive(Clone)]
pub struct GetHrRequestUseCase {
    repository: Arc<dyn HrRequestRepository>,
}

impl GetHrRequestUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn HrRequestRepository>) -> Self {
        Self { repository }
    }

    /// Returns the request, or `None` when it does not exist.
    pub async fn execute(&self, request_id: HrRequestId) -> AppResult<Option<HrRequest>> {
        self.repository.find_by_id(request_id).await
    }
}

/// Lists requests in a scope.
#[derive(Clone)]
pub struct ListHrRequestsUseCase {
    repository: Arc<dyn HrRequestRepository>,
}

impl ListHrRequestsUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn HrRequestRepository>) -> Self {
        Self { repository }
    }

    /// Returns requests covered by the scope.
    pub async fn execute(&self, scope: HrRequestScope) -> AppResult<Vec<HrRequest>> {
        match scope {
            HrRequestScope::All => self.repository.list().await,
            HrRequestScope::RequestedBy(requester) => {
                self.repository.list_by_requester(requester.as_str()).await
            }
        }
    }
}
