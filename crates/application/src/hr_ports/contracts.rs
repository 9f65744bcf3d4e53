use async_trait::async_trait;
use hrdesk_core::AppResult;
use hrdesk_domain::{CandidateId, Contract, ContractId};

/// Input payload for drafting a contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftContractInput {
    /// Employee name printed on the contract.
    pub employee_name: String,
    /// Originating candidate, if any.
    pub candidate_id: Option<CandidateId>,
    /// Contracted position.
    pub position: String,
    /// Gross annual salary in cents.
    pub annual_salary_cents: i64,
}

/// Repository port for employment contracts.
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Inserts or replaces a contract.
    async fn save(&self, contract: Contract) -> AppResult<()>;

    /// Finds a contract by id.
    async fn find_by_id(&self, contract_id: ContractId) -> AppResult<Option<Contract>>;

    /// Lists contracts, newest first.
    async fn list(&self) -> AppResult<Vec<Contract>>;
}
