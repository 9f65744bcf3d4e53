use hrdesk_application::DraftContractInput;
use hrdesk_core::AppError;
use hrdesk_domain::{CandidateId, Contract};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for drafting a contract.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/draft-contract-request.ts"
)]
pub struct DraftContractRequest {
    pub employee_name: String,
    pub candidate_id: Option<String>,
    pub position: String,
    #[ts(type = "number")]
    pub annual_salary_cents: i64,
}

impl TryFrom<DraftContractRequest> for DraftContractInput {
    type Error = AppError;

    fn try_from(value: DraftContractRequest) -> Result<Self, Self::Error> {
        let candidate_id = value
            .candidate_id
            .filter(|candidate_id| !candidate_id.trim().is_empty())
            .map(|candidate_id| CandidateId::parse(candidate_id.trim()))
            .transpose()?;

        Ok(Self {
            employee_name: value.employee_name,
            candidate_id,
            position: value.position,
            annual_salary_cents: value.annual_salary_cents,
        })
    }
}

/// API representation of an employment contract.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/contract-response.ts"
)]
pub struct ContractResponse {
    pub id: String,
    pub employee_name: String,
    pub candidate_id: Option<String>,
    pub position: String,
    #[ts(type = "number")]
    pub annual_salary_cents: i64,
    pub status: String,
    pub created_at: String,
    pub signed_at: Option<String>,
}

impl From<Contract> for ContractResponse {
    fn from(contract: Contract) -> Self {
        Self {
            id: contract.id().to_string(),
            employee_name: contract.employee_name().as_str().to_owned(),
            candidate_id: contract.candidate_id().map(|id| id.to_string()),
            position: contract.position().as_str().to_owned(),
            annual_salary_cents: contract.annual_salary_cents(),
            status: contract.status().as_str().to_owned(),
            created_at: contract.created_at().to_rfc3339(),
            signed_at: contract.signed_at().map(|value| value.to_rfc3339()),
        }
    }
}
