use std::sync::Arc;

use chrono::Utc;
use hrdesk_core::{AppResult, SessionUser};
use hrdesk_domain::{Approval, HrRequestId};

use crate::{ApprovalRepository, RecordApprovalInput};

/// Records an approver's decision on a request.
#[derive(Clone)]
pub struct RecordApprovalUseCase {
    repository: Arc<dyn ApprovalRepository>,
}

impl RecordApprovalUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ApprovalRepository>) -> Self {
        Self { repository }
    }

    /// Validates the decision and stores it under the approver's role.
    pub async fn execute(
        &self,
        approver: &SessionUser,
        input: RecordApprovalInput,
    ) -> AppResult<Approval> {
        let approval = Approval::new(
            input.request_id,
            approver.id(),
            approver.role(),
            input.decision,
            input.comment,
            Utc::now(),
        )?;
        self.repository.save(approval.clone()).await?;
        Ok(approval)
    }
}

/// Lists the decision trail of a request.
#[derive(Clone)]
pub struct ListApprovalsForRequestUseCase {
    repository: Arc<dyn ApprovalRepository>,
}

impl ListApprovalsForRequestUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ApprovalRepository>) -> Self {
        Self { repository }
    }

    /// Returns decisions recorded for the request.
    pub async fn execute(&self, request_id: HrRequestId) -> AppResult<Vec<Approval>> {
        self.repository.find_by_request_id(request_id).await
    }
}
