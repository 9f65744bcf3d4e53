use hrdesk_application::RegisterCandidateInput;
use hrdesk_domain::Candidate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for candidate registration.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/register-candidate-request.ts"
)]
pub struct RegisterCandidateRequest {
    pub full_name: String,
    pub email: String,
    pub position: String,
}

impl From<RegisterCandidateRequest> for RegisterCandidateInput {
    fn from(value: RegisterCandidateRequest) -> Self {
        Self {
            full_name: value.full_name,
            email: value.email,
            position: value.position,
        }
    }
}

/// API representation of a candidate.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/candidate-response.ts"
)]
pub struct CandidateResponse {
    pub id: String,
    pub full_name: String,
    pub email: String,
    pub position: String,
    pub status: String,
    pub applied_at: String,
    pub hired_at: Option<String>,
}

impl From<Candidate> for CandidateResponse {
    fn from(candidate: Candidate) -> Self {
        Self {
            id: candidate.id().to_string(),
            full_name: candidate.full_name().as_str().to_owned(),
            email: candidate.email().as_str().to_owned(),
            position: candidate.position().as_str().to_owned(),
            status: candidate.status().as_str().to_owned(),
            applied_at: candidate.applied_at().to_rfc3339(),
            hired_at: candidate.hired_at().map(|value| value.to_rfc3339()),
        }
    }
}
