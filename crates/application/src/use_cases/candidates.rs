use std::sync::Arc;

use chrono::Utc;
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::{Candidate, CandidateId};

use crate::{CandidateRepository, RegisterCandidateInput};

/// Registers a new applicant.
#[derive(Clone)]
pub struct RegisterCandidateUseCase {
    repository: Arc<dyn CandidateRepository>,
}

impl RegisterCandidateUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// Validates the input and stores the candidate.
    pub async fn execute(&self, input: RegisterCandidateInput) -> AppResult<Candidate> {
        let candidate = Candidate::new(input.full_name, input.email, input.position, Utc::now())?;
        self.repository.save(candidate.clone()).await?;
        Ok(candidate)
    }
}

/// Looks up one candidate.
#[derive(Clone)]
pub struct GetCandidateUseCase {
    repository: Arc<dyn CandidateRepository>,
}

impl GetCandidateUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// Returns the candidate, or `None` when it does not exist.
    pub async fn execute(&self, candidate_id: CandidateId) -> AppResult<Option<Candidate>> {
        self.repository.find_by_id(candidate_id).await
    }
}

/// Lists the recruitment pipeline.
#[derive(Clone)]
pub struct ListCandidatesUseCase {
    repository: Arc<dyn CandidateRepository>,
}

impl ListCandidatesUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// Returns every candidate.
    pub async fn execute(&self) -> AppResult<Vec<Candidate>> {
        self.repository.list().await
    }
}

/// Moves a candidate to the hired stage.
#[derive(Clone)]
pub struct HireCandidateUseCase {
    repository: Arc<dyn CandidateRepository>,
}

impl HireCandidateUseCase {
    /// Creates the use case from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn CandidateRepository>) -> Self {
        Self { repository }
    }

    /// Hires the candidate as of now.
    pub async fn execute(&self, candidate_id: CandidateId) -> AppResult<Candidate> {
        let mut candidate = self
            .repository
            .find_by_id(candidate_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("candidate '{candidate_id}' not found")))?;

        candidate.hire(Utc::now())?;
        self.repository.save(candidate.clone()).await?;
        Ok(candidate)
    }
}
