mod approvals;
mod candidates;
mod contracts;
mod dashboard;
mod performance;
mod requests;

pub use approvals::{ApprovalRepository, RecordApprovalInput};
pub use candidates::{CandidateRepository, RegisterCandidateInput};
pub use contracts::{ContractRepository, DraftContractInput};
pub use dashboard::DashboardRepository;
pub use performance::{OpenPerformanceCycleInput, PerformanceCycleRepository};
pub use requests::{HrRequestRepository, HrRequestScope, SubmitHrRequestInput};
