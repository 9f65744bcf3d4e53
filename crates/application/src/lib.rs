//! Application ports, the access gate, and HR use cases.

#![forbid(unsafe_code)]

mod access_gate;
mod hr_ports;
mod use_cases;

pub use access_gate::{
    AccessGate, DenialReason, GateDecision, GateDenial, GateDestinations, SessionResolver,
};
pub use hr_ports::{
    ApprovalRepository, CandidateRepository, ContractRepository, DashboardRepository,
    DraftContractInput, HrRequestRepository, HrRequestScope, OpenPerformanceCycleInput,
    PerformanceCycleRepository, RecordApprovalInput, RegisterCandidateInput, SubmitHrRequestInput,
};
pub use use_cases::{
    DraftContractUseCase, GetCandidateUseCase, GetContractUseCase, GetDashboardStatsUseCase,
    GetHrRequestUseCase, HireCandidateUseCase, ListApprovalsForRequestUseCase,
    ListCandidatesUseCase, ListContractsUseCase, ListHrRequestsUseCase,
    ListPerformanceCyclesUseCase, OpenPerformanceCycleUseCase, RecordApprovalUseCase,
    RegisterCandidateUseCase, SignContractUseCase, SubmitHrRequestUseCase,
};
