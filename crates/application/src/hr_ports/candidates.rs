use async_trait::async_trait;
use hrdesk_core::AppResult;
use hrdesk_domain::{Candidate, CandidateId};

/// Input payload for registering a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterCandidateInput {
    /// Candidate full name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Position applied for.
    pub position: String,
}

/// Repository port for recruitment candidates.
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Inserts or replaces a candidate.
    async fn save(&self, candidate: Candidate) -> AppResult<()>;

    /// Finds a candidate by id.
    async fn find_by_id(&self, candidate_id: CandidateId) -> AppResult<Option<Candidate>>;

    /// Lists candidates, most recent application first.
    async fn list(&self) -> AppResult<Vec<Candidate>>;
}
