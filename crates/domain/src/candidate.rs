use chrono::{DateTime, Utc};
use hrdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{CandidateId, EmailAddress};

/// Recruitment pipeline stage of a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    /// Application received.
    Applied,
    /// Interviews in progress.
    Interviewing,
    /// Offer extended.
    Offered,
    /// Offer accepted.
    Hired,
    /// Application closed without a hire.
    Rejected,
}

impl CandidateStatus {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Interviewing => "interviewing",
            Self::Offered => "offered",
            Self::Hired => "hired",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a storage string into a candidate status.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "applied" => Ok(Self::Applied),
            "interviewing" => Ok(Self::Interviewing),
            "offered" => Ok(Self::Offered),
            "hired" => Ok(Self::Hired),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown candidate status '{value}'"
            ))),
        }
    }
}

/// Person moving through the recruitment pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    id: CandidateId,
    full_name: NonEmptyString,
    email: EmailAddress,
    position: NonEmptyString,
    status: CandidateStatus,
    applied_at: DateTime<Utc>,
    hired_at: Option<DateTime<Utc>>,
}

impl Candidate {
    /// Creates a freshly applied candidate.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        applied_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: CandidateId::new(),
            full_name: NonEmptyString::new(full_name)?,
            email: EmailAddress::new(email)?,
            position: NonEmptyString::new(position)?,
            status: CandidateStatus::Applied,
            applied_at,
            hired_at: None,
        })
    }

    /// Rebuilds a candidate from persisted values.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: CandidateId,
        full_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        status: CandidateStatus,
        applied_at: DateTime<Utc>,
        hired_at: Option<DateTime<Utc>>,
    ) -> AppResult<Self> {
        if (status == CandidateStatus::Hired) != hired_at.is_some() {
            return Err(AppError::Validation(format!(
                "candidate '{id}' has inconsistent hire state"
            )));
        }

        Ok(Self {
            id,
            full_name: NonEmptyString::new(full_name)?,
            email: EmailAddress::new(email)?,
            position: NonEmptyString::new(position)?,
            status,
            applied_at,
            hired_at,
        })
    }

    /// Marks the candidate as hired.
    pub fn hire(&mut self, hired_at: DateTime<Utc>) -> AppResult<()> {
        match self.status {
            CandidateStatus::Hired => {
                return Err(AppError::Conflict(format!(
                    "candidate '{}' is already hired",
                    self.id
                )));
            }
            CandidateStatus::Rejected => {
                return Err(AppError::Validation(format!(
                    "rejected candidate '{}' cannot be hired",
                    self.id
                )));
            }
            CandidateStatus::Applied | CandidateStatus::Interviewing | CandidateStatus::Offered => {}
        }

        if hired_at < self.applied_at {
            return Err(AppError::Validation(
                "hire date must not precede the application date".to_owned(),
            ));
        }

        self.status = CandidateStatus::Hired;
        self.hired_at = Some(hired_at);
        Ok(())
    }

    /// Returns days between application and hire, for hired candidates.
    #[must_use]
    pub fn days_to_hire(&self) -> Option<f64> {
        self.hired_at.map(|hired_at| {
            let seconds = (hired_at - self.applied_at).num_seconds();
            seconds as f64 / 86_400.0
        })
    }

    /// Returns the candidate id.
    #[must_use]
    pub fn id(&self) -> CandidateId {
        self.id
    }

    /// Returns the candidate's full name.
    #[must_use]
    pub fn full_name(&self) -> &NonEmptyString {
        &self.full_name
    }

    /// Returns the contact email.
    #[must_use]
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Returns the position applied for.
    #[must_use]
    pub fn position(&self) -> &NonEmptyString {
        &self.position
    }

    /// Returns the pipeline stage.
    #[must_use]
    pub fn status(&self) -> CandidateStatus {
        self.status
    }

    /// Returns when the application was received.
    #[must_use]
    pub fn applied_at(&self) -> DateTime<Utc> {
        self.applied_at
    }

    /// Returns when the candidate was hired.
    #[must_use]
    pub fn hired_at(&self) -> Option<DateTime<Utc>> {
        self.hired_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::{Candidate, CandidateStatus};

    fn candidate() -> Candidate {
        Candidate::new("Ada Lovelace", "ada@example.com", "Analyst", Utc::now())
            .unwrap_or_else(|error| panic!("valid candidate: {error}"))
    }

    #[test]
    fn new_candidate_starts_as_applied() {
        let candidate = candidate();
        assert_eq!(candidate.status(), CandidateStatus::Applied);
        assert!(candidate.hired_at().is_none());
        assert!(candidate.days_to_hire().is_none());
    }

    #[test]
    fn blank_position_is_rejected() {
        let result = Candidate::new("Ada", "ada@example.com", " ", Utc::now());
        assert!(result.is_err());
    }

    #[test]
    fn hire_records_days_to_hire() {
        let mut candidate = candidate();
        let hired_at = candidate.applied_at() + Duration::days(14);

        assert!(candidate.hire(hired_at).is_ok());
        assert_eq!(candidate.status(), CandidateStatus::Hired);
        assert_eq!(candidate.days_to_hire(), Some(14.0));
    }

    #[test]
    fn hiring_twice_is_a_conflict() {
        let mut candidate = candidate();
        let hired_at = candidate.applied_at();
        assert!(candidate.hire(hired_at).is_ok());
        assert!(matches!(
            candidate.hire(hired_at),
            Err(hrdesk_core::AppError::Conflict(_))
        ));
    }

    #[test]
    fn hire_before_application_is_rejected() {
        let mut candidate = candidate();
        let hired_at = candidate.applied_at() - Duration::days(1);
        assert!(candidate.hire(hired_at).is_err());
    }

    #[test]
    fn restore_rejects_hired_without_date() {
        let original = candidate();
        let restored = Candidate::restore(
            original.id(),
            "Ada Lovelace",
            "ada@example.com",
            "Analyst",
            CandidateStatus::Hired,
            original.applied_at(),
            None,
        );
        assert!(restored.is_err());
    }
}
