//! One struct per business operation.
//!
//! Each use case holds exactly one repository port and exposes a single
//! `execute` entry point. Repository failures are returned unchanged;
//! validation runs before the repository is called.

mod approvals;
mod candidates;
mod contracts;
mod dashboard;
mod performance;
mod requests;


pub use approvals::{ListApprovalsForRequestUseCase, RecordApprovalUseCase};
pub use candidates::{
    GetCandidateUseCase, HireCandidateUseCase, ListCandidatesUseCase, RegisterCandidateUseCase,
};
pub use contracts::{
    DraftContractUseCase, GetContractUseCase, ListContractsUseCase, SignContractUseCase,
};
pub use dashboard::GetDashboardStatsUseCase;
pub use performance::{ListPerformanceCyclesUseCase, OpenPerformanceCycleUseCase};
pub use requests::{GetHrRequestUseCase, ListHrRequestsUseCase, SubmitHrRequestUseCase};
