mod auth;
mod candidates;
mod common;
mod contracts;
mod dashboard;
mod performance;
mod requests;

pub use auth::{BootstrapSessionRequest, SessionUserResponse};
pub use candidates::{CandidateResponse, RegisterCandidateRequest};
pub use common::HealthResponse;
pub use contracts::{ContractResponse, DraftContractRequest};
pub use dashboard::DashboardStatsResponse;
pub use performance::{OpenPerformanceCycleRequest, PerformanceCycleResponse};
pub use requests::{
    ApprovalResponse, HrRequestResponse, ListHrRequestsQuery, RecordApprovalRequest,
    SubmitHrRequestRequest,
};
