use std::collections::HashMap;

use async_trait::async_trait;
use hrdesk_application::{
    ApprovalRepository, CandidateRepository, ContractRepository, DashboardRepository,
    HrRequestRepository, PerformanceCycleRepository,
};
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::{
    Approval, Candidate, CandidateId, Contract, ContractId, ContractStatus, DashboardStats,
    HrRequest, HrRequestId, HrRequestStatus, PerformanceCycle, PerformanceCycleId,
};
use tokio::sync::RwLock;

#[cfg(test)]
mod tests;

/// In-memory HR store implementing every repository port.
///
/// Used for local development and router tests. Lock order is
/// requests before approvals.
#[derive(Debug, Default)]
pub struct InMemoryHrRepository {
    candidates: RwLock<HashMap<CandidateId, Candidate>>,
    requests: RwLock<HashMap<HrRequestId, HrRequest>>,
    approvals: RwLock<Vec<Approval>>,
    contracts: RwLock<HashMap<ContractId, Contract>>,
    cycles: RwLock<HashMap<PerformanceCycleId, PerformanceCycle>>,
}

impl InMemoryHrRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<T, K: Ord>(mut values: Vec<T>, key: impl Fn(&T) -> K) -> Vec<T> {
    values.sort_by_key(|value| std::cmp::Reverse(key(value)));
    values
}

#[async_trait]
impl CandidateRepository for InMemoryHrRepository {
    async fn save(&self, candidate: Candidate) -> AppResult<()> {
        self.candidates.write().await.insert(candidate.id(), candidate);
        Ok(())
    }

    async fn find_by_id(&self, candidate_id: CandidateId) -> AppResult<Option<Candidate>> {
        Ok(self.candidates.read().await.get(&candidate_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Candidate>> {
        let candidates: Vec<Candidate> = self
            .candidates
            .read()
            .await
            .values()
            .cloned()
            .collect();
        Ok(newest_first(candidates, Candidate::applied_at))
    }
}

#[async_trait]
impl HrRequestRepository for InMemoryHrRepository {
    async fn save(&self, request: HrRequest) -> AppResult<()> {
        self.requests.write().await.insert(request.id(), request);
        Ok(())
    }

    async fn find_by_id(&self, request_id: HrRequestId) -> AppResult<Option<HrRequest>> {
        Ok(self.requests.read().await.get(&request_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<HrRequest>> {
        let requests: Vec<HrRequest> = self
            .requests
            .read()
            .await
            .values()
            .cloned()
            .collect();
        Ok(newest_first(requests, HrRequest::created_at))
    }

    async fn list_by_requester(&self, requester: &str) -> AppResult<Vec<HrRequest>> {
        let requests: Vec<HrRequest> = self
            .requests
            .read()
            .await
            .values()
            .filter(|request| request.requester().as_str() == requester)
            .cloned()
            .collect();
        Ok(newest_first(requests, HrRequest::created_at))
    }
}

#[async_trait]
impl ApprovalRepository for InMemoryHrRepository {
    async fn save(&self, approval: Approval) -> AppResult<()> {
        let request_id = approval.request_id();
        let mut requests = self.requests.write().await;
        let request = requests
            .get_mut(&request_id)
            .ok_or_else(|| AppError::NotFound(format!("hr request '{request_id}' not found")))?;

        request.settle(approval.decision().resulting_request_status())?;
        self.approvals.write().await.push(approval);
        Ok(())
    }

    async fn find_by_request_id(&self, request_id: HrRequestId) -> AppResult<Vec<Approval>> {
        let mut approvals: Vec<Approval> = self
            .approvals
            .read()
            .await
            .iter()
            .filter(|approval| approval.request_id() == request_id)
            .cloned()
            .collect();
        approvals.sort_by_key(Approval::decided_at);
        Ok(approvals)
    }
}

#[async_trait]
impl ContractRepository for InMemoryHrRepository {
    async fn save(&self, contract: Contract) -> AppResult<()> {
        if let Some(candidate_id) = contract.candidate_id()
            && !self.candidates.read().await.contains_key(&candidate_id)
        {
            return Err(AppError::Validation(format!(
                "candidate '{candidate_id}' does not exist"
            )));
        }

        self.contracts.write().await.insert(contract.id(), contract);
        Ok(())
    }

    async fn find_by_id(&self, contract_id: ContractId) -> AppResult<Option<Contract>> {
        Ok(self.contracts.read().await.get(&contract_id).cloned())
    }

    async fn list(&self) -> AppResult<Vec<Contract>> {
        let contracts: Vec<Contract> = self
            .contracts
            .read()
            .await
            .values()
            .cloned()
            .collect();
        Ok(newest_first(contracts, Contract::created_at))
    }
}

#[async_trait]
impl PerformanceCycleRepository for InMemoryHrRepository {
    async fn save(&self, cycle: PerformanceCycle) -> AppResult<()> {
        let mut cycles = self.cycles.write().await;

        let name_taken = cycles.values().any(|existing| {
            existing.id() != cycle.id() && existing.name().as_str() == cycle.name().as_str()
        });
        if name_taken {
            return Err(AppError::Conflict(format!(
                "performance cycle '{}' already exists",
                cycle.name()
            )));
        }

        cycles.insert(cycle.id(), cycle);
        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<PerformanceCycle>> {
        let cycles: Vec<PerformanceCycle> = self
            .cycles
            .read()
            .await
            .values()
            .cloned()
            .collect();
        Ok(newest_first(cycles, PerformanceCycle::starts_on))
    }
}

#[async_trait]
impl DashboardRepository for InMemoryHrRepository {
    async fn get_stats(&self) -> AppResult<DashboardStats> {
        let (total_requests, pending_requests, approved_requests) = {
            let requests = self.requests.read().await;
            let with_status = |status: HrRequestStatus| {
                requests
                    .values()
                    .filter(|request| request.status() == status)
                    .count() as u64
            };
            (
                requests.len() as u64,
                with_status(HrRequestStatus::Pending),
                with_status(HrRequestStatus::Approved),
            )
        };

        let signed_contracts = self
            .contracts
            .read()
            .await
            .values()
            .filter(|contract| contract.status() == ContractStatus::Signed)
            .count() as u64;

        let hire_durations: Vec<f64> = self
            .candidates
            .read()
            .await
            .values()
            .filter_map(Candidate::days_to_hire)
            .collect();
        let average_time_to_hire = if hire_durations.is_empty() {
            0.0
        } else {
            hire_durations.iter().sum::<f64>() / hire_durations.len() as f64
        };

        Ok(DashboardStats {
            total_requests,
            pending_requests,
            approved_requests,
            signed_contracts,
            average_time_to_hire,
        })
    }
}
