//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod access;
mod approval;
mod candidate;
mod contract;
mod dashboard;
mod email;
mod hr_request;
mod ids;
mod performance;

pub use access::RoleRequirement;
pub use approval::{Approval, ApprovalDecision};
pub use candidate::{Candidate, CandidateStatus};
pub use contract::{Contract, ContractStatus};
pub use dashboard::DashboardStats;
pub use email::EmailAddress;
pub use hr_request::{HrRequest, HrRequestKind, HrRequestStatus};
pub use ids::{ApprovalId, CandidateId, ContractId, HrRequestId, PerformanceCycleId};
pub use performance::{PerformanceCycle, PerformanceCycleStatus};
