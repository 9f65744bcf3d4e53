use std::sync::Arc;

use hrdesk_application::{
    AccessGate, ApprovalRepository, CandidateRepository, ContractRepository, DashboardRepository,
    DraftContractUseCase, GateDestinations, GetCandidateUseCase, GetContractUseCase,
    GetDashboardStatsUseCase, GetHrRequestUseCase, HireCandidateUseCase, HrRequestRepository,
    ListApprovalsForRequestUseCase, ListCandidatesUseCase, ListContractsUseCase,
    ListHrRequestsUseCase, ListPerformanceCyclesUseCase, OpenPerformanceCycleUseCase,
    PerformanceCycleRepository, RecordApprovalUseCase, RegisterCandidateUseCase,
    SignContractUseCase, SubmitHrRequestUseCase,
};
use hrdesk_infrastructure::{
    InMemoryHrRepository, PostgresApprovalRepository, PostgresCandidateRepository,
    PostgresContractRepository, PostgresDashboardRepository, PostgresHrRequestRepository,
    PostgresPerformanceCycleRepository,
};
use sqlx::PgPool;

use crate::api_config::ApiConfig;
use crate::state::{AppState, HrUseCases};

/// One adapter per repository port.
#[derive(Clone)]
pub struct HrRepositorySet {
    pub candidates: Arc<dyn CandidateRepository>,
    pub requests: Arc<dyn HrRequestRepository>,
    pub approvals: Arc<dyn ApprovalRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub performance_cycles: Arc<dyn PerformanceCycleRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
}

impl HrRepositorySet {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            candidates: Arc::new(PostgresCandidateRepository::new(pool.clone())),
            requests: Arc::new(PostgresHrRequestRepository::new(pool.clone())),
            approvals: Arc::new(PostgresApprovalRepository::new(pool.clone())),
            contracts: Arc::new(PostgresContractRepository::new(pool.clone())),
            performance_cycles: Arc::new(PostgresPerformanceCycleRepository::new(pool.clone())),
            dashboard: Arc::new(PostgresDashboardRepository::new(pool.clone())),
        }
    }

    pub fn in_memory() -> Self {
        let store = Arc::new(InMemoryHrRepository::new());
        Self {
            candidates: store.clone(),
            requests: store.clone(),
            approvals: store.clone(),
            contracts: store.clone(),
            performance_cycles: store.clone(),
            dashboard: store,
        }
    }
}

pub fn build_app_state(repositories: HrRepositorySet, config: &ApiConfig) -> AppState {
    let HrRepositorySet {
        candidates,
        requests,
        approvals,
        contracts,
        performance_cycles,
        dashboard,
    } = repositories;

    AppState {
        access_gate: AccessGate::new(GateDestinations::new(
            config.login_url.clone(),
            config.forbidden_url.clone(),
        )),
        use_cases: HrUseCases {
            get_dashboard_stats: GetDashboardStatsUseCase::new(dashboard),
            register_candidate: RegisterCandidateUseCase::new(candidates.clone()),
            get_candidate: GetCandidateUseCase::new(candidates.clone()),
            list_candidates: ListCandidatesUseCase::new(candidates.clone()),
            hire_candidate: HireCandidateUseCase::new(candidates),
            submit_request: SubmitHrRequestUseCase::new(requests.clone()),
            get_request: GetHrRequestUseCase::new(requests.clone()),
            list_requests: ListHrRequestsUseCase::new(requests),
            record_approval: RecordApprovalUseCase::new(approvals.clone()),
            list_approvals: ListApprovalsForRequestUseCase::new(approvals),
            draft_contract: DraftContractUseCase::new(contracts.clone()),
            get_contract: GetContractUseCase::new(contracts.clone()),
            list_contracts: ListContractsUseCase::new(contracts.clone()),
            sign_contract: SignContractUseCase::new(contracts),
            open_performance_cycle: OpenPerformanceCycleUseCase::new(performance_cycles.clone()),
            list_performance_cycles: ListPerformanceCyclesUseCase::new(performance_cycles),
        },
        frontend_url: config.frontend_url.clone(),
        bootstrap_token: config.bootstrap_token.clone(),
    }
}
