use chrono::{DateTime, Utc};
use hrdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{CandidateId, ContractId};

/// Lifecycle state of an employment contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    /// Being prepared by HR.
    Draft,
    /// Sent to the employee for signature.
    Sent,
    /// Signed by the employee.
    Signed,
}

impl ContractStatus {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Signed => "signed",
        }
    }

    /// Parses a storage string into a contract status.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "draft" => Ok(Self::Draft),
            "sent" => Ok(Self::Sent),
            "signed" => Ok(Self::Signed),
            _ => Err(AppError::Validation(format!(
                "unknown contract status '{value}'"
            ))),
        }
    }
}

/// Employment contract prepared for a new or existing employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    id: ContractId,
    employee_name: NonEmptyString,
    candidate_id: Option<CandidateId>,
    position: NonEmptyString,
    annual_salary_cents: i64,
    status: ContractStatus,
    created_at: DateTime<Utc>,
    signed_at: Option<DateTime<Utc>>,
}

impl Contract {
    /// Creates a draft contract.
    pub fn draft(
        employee_name: impl Into<String>,
        candidate_id: Option<CandidateId>,
        position: impl Into<String>,
        annual_salary_cents: i64,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        validate_salary(annual_salary_cents)?;

        Ok(Self {
            id: ContractId::new(),
            employee_name: NonEmptyString::new(employee_name)?,
            candidate_id,
            position: NonEmptyString::new(position)?,
            annual_salary_cents,
            status: ContractStatus::Draft,
            created_at,
            signed_at: None,
        })
    }

    /// Rebuilds a contract from persisted values.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ContractId,
        employee_name: impl Into<String>,
        candidate_id: Option<CandidateId>,
        position: impl Into<String>,
        annual_salary_cents: i64,
        status: ContractStatus,
        created_at: DateTime<Utc>,
        signed_at: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        validate_salary(annual_salary_cents)?;
        if (status == ContractStatus::Signed) != signed_at.is_some() {
            return Err(AppError::Validation(format!(
                "contract '{id}' has inconsistent signature state"
            )));
        }

        Ok(Self {
            id,
            employee_name: NonEmptyString::new(employee_name)?,
            candidate_id,
            position: NonEmptyString::new(position)?,
            annual_salary_cents,
            status,
            created_at,
            signed_at,
        })
    }

    /// Records the employee signature.
    pub fn sign(&mut self, signed_at: DateTime<Utc>) -> AppResult<()> {
        if self.status == ContractStatus::Signed {
            return Err(AppError::Conflict(format!(
                "contract '{}' is already signed",
                self.id
            )));
        }

        if signed_at < self.created_at {
            return Err(AppError::Validation(
                "signature date must not precede contract creation".to_owned(),
            ));
        }

        self.status = ContractStatus::Signed;
        self.signed_at = Some(signed_at);
        Ok(())
    }

    /// Returns the contract id.
    #[must_use]
    pub fn id(&self) -> ContractId {
        self.id
    }

    /// Returns the employee name printed on the contract.
    #[must_use]
    pub fn employee_name(&self) -> &NonEmptyString {
        &self.employee_name
    }

    /// Returns the originating candidate, if the contract came from recruitment.
    #[must_use]
    pub fn candidate_id(&self) -> Option<CandidateId> {
        self.candidate_id
    }

    /// Returns the contracted position.
    #[must_use]
    pub fn position(&self) -> &NonEmptyString {
        &self.position
    }

    /// Returns the gross annual salary in cents.
    #[must_use]
    pub fn annual_salary_cents(&self) -> i64 {
        self.annual_salary_cents
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub fn status(&self) -> ContractStatus {
        self.status
    }

    /// Returns when the contract was drafted.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns when the contract was signed.
    #[must_use]
    pub fn signed_at(&self) -> Option<DateTime<Utc>> {
        self.signed_at
    }
}

fn validate_salary(annual_salary_cents: i64) -> AppResult<()> {
    if annual_salary_cents <= 0 {
        return Err(AppError::Validation(
            "annual salary must be positive".to_owned(),
        ));
    }

    Ok(())
}
