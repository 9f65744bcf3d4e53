use async_trait::async_trait;
use hrdesk_core::AppResult;
use hrdesk_domain::{HrRequest, HrRequestId, HrRequestKind};

/// Input payload for submitting an HR request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitHrRequestInput {
    /// Request category.
    pub kind: HrRequestKind,
    /// Short title.
    pub title: String,
    /// Optional details.
    pub description: Option<String>,
}

/// Which requests a listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HrRequestScope {
    /// Every request.
    All,
    /// Requests raised by one subject.
    RequestedBy(String),
}

/// Repository port for employee HR requests.
#[async_trait]
pub trait HrRequestRepository: Send + Sync {
    /// Inserts or replaces a request.
    async fn save(&self, request: HrRequest) -> AppResult<()>;

    /// Finds a request by id.
    async fn find_by_id(&self, request_id: HrRequestId) -> AppResult<Option<HrRequest>>;

    /// Lists all requests, newest first.
    async fn list(&self) -> AppResult<Vec<HrRequest>>;

    /// Lists requests raised by a subject, newest first.
    async fn list_by_requester(&self, requester: &str) -> AppResult<Vec<HrRequest>>;
}
