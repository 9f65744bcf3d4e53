use std::sync::Arc;

use chrono::Utc;
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::{Contract, ContractId};

use crate::{ContractRepository, DraftContractInput};

/// Drafts a new contract.
#[derive(Clone)]
pub struct DraftContractUseCase {
    repository: Arc<dyn ContractRepository>,
}

impl DraftContractUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ContractRepository>) -> Self {
        Self { repository }
    }

    /// Validates the input and stores a draft.
    pub async fn execute(&self, input: DraftContractInput) -> AppResult<Contract> {
        let contract = Contract::draft(
            input.employee_name,
            input.candidate_id,
            input.position,
            input.annual_salary_cents,
            Utc::now(),
        )?;
        self.repository.save(contract.clone()).await?;
        Ok(contract)
    }
}

/// Looks up one contract.
#[derive(Clone)]
pub struct GetContractUseCase {
    repository: Arc<dyn ContractRepository>,
}

impl GetContractUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ContractRepository>) -> Self {
        Self { repository }
    }

    /// Returns the contract, or `None` when it does not exist.
    pub async fn execute(&self, contract_id: ContractId) -> AppResult<Option<Contract>> {
        self.repository.find_by_id(contract_id).await
    }
}

/// Lists contracts.
#[derive(Clone)]
pub struct ListContractsUseCase {
    repository: Arc<dyn ContractRepository>,
}

impl ListContractsUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ContractRepository>) -> Self {
        Self { repository }
    }

    /// Returns every contract.
    pub async fn execute(&self) -> AppResult<Vec<Contract>> {
        self.repository.list().await
    }
}

/// Records the employee signature on a contract.
#[derive(Clone)]
pub struct SignContractUseCase {
    repository: Arc<dyn ContractRepository>,
}

impl SignContractUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn ContractRepository>) -> Self {
        Self { repository }
    }

    /// Signs the contract as of now.
    pub async fn execute(&self, contract_id: ContractId) -> AppResult<Contract> {
        let mut contract = self
            .repository
            .find_by_id(contract_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("contract '{contract_id}' not found")))?;

        contract.sign(Utc::now())?;
        self.repository.save(contract.clone()).await?;
        Ok(contract)
    }
}
