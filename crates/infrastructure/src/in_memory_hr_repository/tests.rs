use chrono::{Duration, NaiveDate, Utc};
use hrdesk_application::{
    ApprovalRepository, CandidateRepository, ContractRepository, DashboardRepository,
    HrRequestRepository, PerformanceCycleRepository,
};
use hrdesk_core::{AppError, Role};
use hrdesk_domain::{
    Approval, ApprovalDecision, Candidate, CandidateId, Contract, HrRequest, HrRequestId,
    HrRequestKind, HrRequestStatus, PerformanceCycle, PerformanceCycleStatus,
};

use super::InMemoryHrRepository;

fn request(requester: &str, title: &str) -> HrRequest {
    let request = HrRequest::new(requester, HrRequestKind::Leave, title, None, Utc::now());
    assert!(request.is_ok());
    request.unwrap_or_else(|_| unreachable!())
}

fn approval(request_id: HrRequestId, decision: ApprovalDecision) -> Approval {
    let approval = Approval::new(
        request_id,
        "manager-1",
        Role::Manager,
        decision,
        Some("reviewed".to_owned()),
        Utc::now(),
    );
    assert!(approval.is_ok());
    approval.unwrap_or_else(|_| unreachable!())
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| unreachable!())
}

#[tokio::test]
async fn empty_store_reports_zeroed_stats() {
    let repository = InMemoryHrRepository::new();

    let stats = repository.get_stats().await;
    assert!(stats.is_ok());
    assert_eq!(stats.unwrap_or_default(), Default::default());
}

#[tokio::test]
async fn approval_settles_pending_request() {
    let repository = InMemoryHrRepository::new();
    let pending = request("employee-1", "Annual leave");
    let request_id = pending.id();
    assert!(HrRequestRepository::save(&repository, pending).await.is_ok());

    let saved = ApprovalRepository::save(
        &repository,
        approval(request_id, ApprovalDecision::Approved),
    )
    .await;
    assert!(saved.is_ok());

    let stored = HrRequestRepository::find_by_id(&repository, request_id).await;
    assert_eq!(
        stored.ok().flatten().map(|value| value.status()),
        Some(HrRequestStatus::Approved)
    );

    let approvals = repository.find_by_request_id(request_id).await;
    assert_eq!(approvals.map(|values| values.len()).ok(), Some(1));
}

#[tokio::test]
async fn second_decision_on_settled_request_conflicts() {
    let repository = InMemoryHrRepository::new();
    let pending = request("employee-1", "Laptop");
    let request_id = pending.id();
    assert!(HrRequestRepository::save(&repository, pending).await.is_ok());

    let first = ApprovalRepository::save(
        &repository,
        approval(request_id, ApprovalDecision::Rejected),
    )
    .await;
    assert!(first.is_ok());

    let second = ApprovalRepository::save(
        &repository,
        approval(request_id, ApprovalDecision::Approved),
    )
    .await;
    assert!(matches!(second, Err(AppError::Conflict(_))));

    let approvals = repository.find_by_request_id(request_id).await;
    assert_eq!(approvals.map(|values| values.len()).ok(), Some(1));
}

#[tokio::test]
async fn approval_for_unknown_request_is_not_found() {
    let repository = InMemoryHrRepository::new();

    let saved = ApprovalRepository::save(
        &repository,
        approval(HrRequestId::new(), ApprovalDecision::Approved),
    )
    .await;
    assert!(matches!(saved, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn requests_are_filtered_by_requester() {
    let repository = InMemoryHrRepository::new();
    assert!(
        HrRequestRepository::save(&repository, request("alice", "Leave"))
            .await
            .is_ok()
    );
    assert!(
        HrRequestRepository::save(&repository, request("bob", "Training"))
            .await
            .is_ok()
    );

    let mine = repository.list_by_requester("alice").await;
    assert!(mine.is_ok());
    let mine = mine.unwrap_or_default();
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].requester().as_str(), "alice");

    let all = HrRequestRepository::list(&repository).await;
    assert_eq!(all.map(|values| values.len()).ok(), Some(2));
}

#[tokio::test]
async fn contract_for_unknown_candidate_is_rejected() {
    let repository = InMemoryHrRepository::new();
    let contract = Contract::draft(
        "Dana Scully",
        Some(CandidateId::new()),
        "Analyst",
        7_500_000,
        Utc::now(),
    );
    assert!(contract.is_ok());

    let saved =
        ContractRepository::save(&repository, contract.unwrap_or_else(|_| unreachable!())).await;
    assert!(matches!(saved, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn duplicate_cycle_name_conflicts() {
    let repository = InMemoryHrRepository::new();

    let first = PerformanceCycle::new("FY26 H1", date(2026, 1, 1), date(2026, 6, 30));
    let second = PerformanceCycle::new("FY26 H1", date(2026, 7, 1), date(2026, 12, 31));
    assert!(first.is_ok());
    assert!(second.is_ok());

    let first_saved =
        PerformanceCycleRepository::save(&repository, first.unwrap_or_else(|_| unreachable!()))
            .await;
    assert!(first_saved.is_ok());

    let second_saved =
        PerformanceCycleRepository::save(&repository, second.unwrap_or_else(|_| unreachable!()))
            .await;
    assert!(matches!(second_saved, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn stored_cycle_reports_status_for_the_read_date() {
    let repository = InMemoryHrRepository::new();
    let cycle = PerformanceCycle::new("Q1", date(2026, 1, 1), date(2026, 3, 31));
    assert!(cycle.is_ok());
    let cycle = cycle.unwrap_or_else(|_| unreachable!());
    assert_eq!(
        cycle.status_on(date(2025, 12, 1)),
        PerformanceCycleStatus::Planned
    );

    let saved = PerformanceCycleRepository::save(&repository, cycle).await;
    assert!(saved.is_ok());

    let listed = PerformanceCycleRepository::list(&repository).await;
    let statuses: Vec<PerformanceCycleStatus> = listed
        .unwrap_or_default()
        .iter()
        .map(|stored| stored.status_on(date(2026, 10, 19)))
        .collect();
    assert_eq!(statuses, vec![PerformanceCycleStatus::Closed]);
}

#[tokio::test]
async fn stats_aggregate_requests_contracts_and_hires() {
    let repository = InMemoryHrRepository::new();

    let approved = request("alice", "Leave");
    let approved_id = approved.id();
    assert!(HrRequestRepository::save(&repository, approved).await.is_ok());
    assert!(
        HrRequestRepository::save(&repository, request("bob", "Training"))
            .await
            .is_ok()
    );
    assert!(
        ApprovalRepository::save(
            &repository,
            approval(approved_id, ApprovalDecision::Approved)
        )
        .await
        .is_ok()
    );

    let applied_at = Utc::now() - Duration::days(10);
    let candidate = Candidate::new("Fox Mulder", "fox@example.com", "Agent", applied_at);
    assert!(candidate.is_ok());
    let mut candidate = candidate.unwrap_or_else(|_| unreachable!());
    assert!(candidate.hire(applied_at + Duration::days(4)).is_ok());
    let candidate_id = candidate.id();
    assert!(
        CandidateRepository::save(&repository, candidate)
            .await
            .is_ok()
    );

    let contract = Contract::draft("Fox Mulder", Some(candidate_id), "Agent", 9_000_000, Utc::now());
    assert!(contract.is_ok());
    let mut contract = contract.unwrap_or_else(|_| unreachable!());
    assert!(contract.sign(Utc::now()).is_ok());
    assert!(ContractRepository::save(&repository, contract).await.is_ok());

    let stats = repository.get_stats().await;
    assert!(stats.is_ok());
    let stats = stats.unwrap_or_default();
    assert_eq!(stats.total_requests, 2);
    assert_eq!(stats.pending_requests, 1);
    assert_eq!(stats.approved_requests, 1);
    assert_eq!(stats.signed_contracts, 1);
    assert!((stats.average_time_to_hire - 4.0).abs() < 1e-9);
}
