//! Infrastructure adapters for application ports.

#![forbid(unsafe_code)]

mod in_memory_hr_repository;
mod postgres_approval_repository;
mod postgres_candidate_repository;
mod postgres_contract_repository;
mod postgres_dashboard_repository;
mod postgres_errors;
mod postgres_hr_request_repository;
mod postgres_performance_cycle_repository;

pub use in_memory_hr_repository::InMemoryHrRepository;
pub use postgres_approval_repository::PostgresApprovalRepository;
pub use postgres_candidate_repository::PostgresCandidateRepository;
pub use postgres_contract_repository::PostgresContractRepository;
pub use postgres_dashboard_repository::PostgresDashboardRepository;
pub use postgres_hr_request_repository::PostgresHrRequestRepository;
pub use postgres_performance_cycle_repository::PostgresPerformanceCycleRepository;
