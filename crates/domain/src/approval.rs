use chrono::{DateTime, Utc};
use hrdesk_core::{AppError, AppResult, NonEmptyString, Role};
use serde::{Deserialize, Serialize};

use crate::{ApprovalId, HrRequestId, HrRequestStatus};

/// Outcome chosen by an approver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    /// Request accepted.
    Approved,
    /// Request declined.
    Rejected,
}

impl ApprovalDecision {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a storage string into a decision.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown approval decision '{value}'"
            ))),
        }
    }

    /// Returns the request status this decision settles on.
    #[must_use]
    pub fn resulting_request_status(&self) -> HrRequestStatus {
        match self {
            Self::Approved => HrRequestStatus::Approved,
            Self::Rejected => HrRequestStatus::Rejected,
        }
    }
}

/// Decision recorded against an HR request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    id: ApprovalId,
    request_id: HrRequestId,
    approver: NonEmptyString,
    approver_role: Role,
    decision: ApprovalDecision,
    comment: Option<NonEmptyString>,
    decided_at: DateTime<Utc>,
}

impl Approval {
    /// Creates a validated approval.
    ///
    /// Rejections must explain themselves with a comment.
    pub fn new(
        request_id: HrRequestId,
        approver: impl Into<String>,
        approver_role: Role,
        decision: ApprovalDecision,
        comment: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        let comment = comment
            .filter(|value| !value.trim().is_empty())
            .map(NonEmptyString::new)
            .transpose()?;

        if decision == ApprovalDecision::Rejected && comment.is_none() {
            return Err(AppError::Validation(
                "a rejection requires a comment".to_owned(),
            ));
        }

        Ok(Self {
            id: ApprovalId::new(),
            request_id,
            approver: NonEmptyString::new(approver)?,
            approver_role,
            decision,
            comment,
            decided_at,
        })
    }

    /// Rebuilds an approval from persisted values.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: ApprovalId,
        request_id: HrRequestId,
        approver: impl Into<String>,
        approver_role: Role,
        decision: ApprovalDecision,
        comment: Option<String>,
        decided_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            request_id,
            approver: NonEmptyString::new(approver)?,
            approver_role,
            decision,
            comment: comment.map(NonEmptyString::new).transpose()?,
            decided_at,
        })
    }

    /// Returns the approval id.
    #[must_use]
    pub fn id(&self) -> ApprovalId {
        self.id
    }

    /// Returns the reviewed request.
    #[must_use]
    pub fn request_id(&self) -> HrRequestId {
        self.request_id
    }

    /// Returns the approver subject.
    #[must_use]
    pub fn approver(&self) -> &NonEmptyString {
        &self.approver
    }

    /// Returns the role the approver acted under.
    #[must_use]
    pub fn approver_role(&self) -> Role {
        self.approver_role
    }

    /// Returns the decision.
    #[must_use]
    pub fn decision(&self) -> ApprovalDecision {
        self.decision
    }

    /// Returns the optional comment.
    #[must_use]
    pub fn comment(&self) -> Option<&NonEmptyString> {
        self.comment.as_ref()
    }

    /// Returns when the decision was taken.
    #[must_use]
    pub fn decided_at(&self) -> DateTime<Utc> {
        self.decided_at
    }
}
