use async_trait::async_trait;
use hrdesk_core::AppResult;
use hrdesk_domain::{Approval, ApprovalDecision, HrRequestId};

/// Input payload for recording a decision on a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordApprovalInput {
    /// Reviewed request.
    pub request_id: HrRequestId,
    /// Decision taken.
    pub decision: ApprovalDecision,
    /// Optional comment; required for rejections.
    pub comment: Option<String>,
}

/// Repository port for approval decisions.
#[async_trait]
pub trait ApprovalRepository: Send + Sync {
    /// Persists a decision and settles the request on
    /// [`ApprovalDecision::resulting_request_status`] in one unit of work.
    ///
    /// Fails with `NotFound` for an unknown request and `Conflict` when the
    /// request is no longer pending.
    async fn save(&self, approval: Approval) -> AppResult<()>;

    /// Lists decisions recorded for a request, oldest first.
    async fn find_by_request_id(&self, request_id: HrRequestId) -> AppResult<Vec<Approval>>;
}
