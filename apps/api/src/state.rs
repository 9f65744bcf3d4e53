use hrdesk_application::{
    AccessGate, DraftContractUseCase, GetCandidateUseCase, GetContractUseCase,
    GetDashboardStatsUseCase, GetHrRequestUseCase, HireCandidateUseCase,
    ListApprovalsForRequestUseCase, ListCandidatesUseCase, ListContractsUseCase,
    ListHrRequestsUseCase, ListPerformanceCyclesUseCase, OpenPerformanceCycleUseCase,
    RecordApprovalUseCase, RegisterCandidateUseCase, SignContractUseCase, SubmitHrRequestUseCase,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub access_gate: AccessGate,
    pub use_cases: HrUseCases,
    pub frontend_url: String,
    pub bootstrap_token: String,
}

/// Use cases wired to their repositories at startup.
#[derive(Clone)]
pub struct HrUseCases {
    pub get_dashboard_stats: GetDashboardStatsUseCase,
    pub register_candidate: RegisterCandidateUseCase,
    pub get_candidate: GetCandidateUseCase,
    pub list_candidates: ListCandidatesUseCase,
    pub hire_candidate: HireCandidateUseCase,
    pub submit_request: SubmitHrRequestUseCase,
    pub get_request: GetHrRequestUseCase,
    pub list_requests: ListHrRequestsUseCase,
    pub record_approval: RecordApprovalUseCase,
    pub list_approvals: ListApprovalsForRequestUseCase,
    pub draft_contract: DraftContractUseCase,
    pub get_contract: GetContractUseCase,
    pub list_contracts: ListContractsUseCase,
    pub sign_contract: SignContractUseCase,
    pub open_performance_cycle: OpenPerformanceCycleUseCase,
    pub list_performance_cycles: ListPerformanceCyclesUseCase,
}
