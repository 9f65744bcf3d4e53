use chrono::{DateTime, Utc};
use hrdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::HrRequestId;

/// Category of an employee request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrRequestKind {
    /// Time off.
    Leave,
    /// Hardware or tooling.
    Equipment,
    /// Course or certification.
    Training,
    /// Reimbursement.
    Expense,
    /// Anything else.
    Other,
}

impl HrRequestKind {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leave => "leave",
            Self::Equipment => "equipment",
            Self::Training => "training",
            Self::Expense => "expense",
            Self::Other => "other",
        }
    }

    /// Parses a storage string into a request kind.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "leave" => Ok(Self::Leave),
            "equipment" => Ok(Self::Equipment),
            "training" => Ok(Self::Training),
            "expense" => Ok(Self::Expense),
            "other" => Ok(Self::Other),
            _ => Err(AppError::Validation(format!(
                "unknown request kind '{value}'"
            ))),
        }
    }
}

/// Review state of an employee request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HrRequestStatus {
    /// Awaiting a decision.
    Pending,
    /// Accepted by an approver.
    Approved,
    /// Declined by an approver.
    Rejected,
}

impl HrRequestStatus {
    /// Returns the storage string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Parses a storage string into a request status.
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(AppError::Validation(format!(
                "unknown request status '{value}'"
            ))),
        }
    }
}

/// Request raised by an employee for HR review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrRequest {
    id: HrRequestId,
    requester: NonEmptyString,
    kind: HrRequestKind,
    title: NonEmptyString,
    description: Option<String>,
    status: HrRequestStatus,
    created_at: DateTime<Utc>,
}

impl HrRequest {
    /// Creates a pending request.
    pub fn new(
        requester: impl Into<String>,
        kind: HrRequestKind,
        title: impl Into<String>,
        description: Option<String>,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id: HrRequestId::new(),
            requester: NonEmptyString::new(requester)?,
            kind,
            title: NonEmptyString::new(title)?,
            description: description.filter(|value| !value.trim().is_empty()),
            status: HrRequestStatus::Pending,
            created_at,
        })
    }

    /// Rebuilds a request from persisted values.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        id: HrRequestId,
        requester: impl Into<String>,
        kind: HrRequestKind,
        title: impl Into<String>,
        description: Option<String>,
        status: HrRequestStatus,
        created_at: DateTime<Utc>,
    ) -> AppResult<Self> {
        Ok(Self {
            id,
            requester: NonEmptyString::new(requester)?,
            kind,
            title: NonEmptyString::new(title)?,
            description,
            status,
            created_at,
        })
    }

    /// Moves a pending request to its final state.
    pub fn settle(&mut self, status: HrRequestStatus) -> AppResult<()> {
        if status == HrRequestStatus::Pending {
            return Err(AppError::Validation(
                "a request can only be settled as approved or rejected".to_owned(),
            ));
        }

        if self.status != HrRequestStatus::Pending {
            return Err(AppError::Conflict(format!(
                "hr request '{}' is no longer pending",
                self.id
            )));
        }

        self.status = status;
        Ok(())
    }

    /// Returns the request id.
    #[must_use]
    pub fn id(&self) -> HrRequestId {
        self.id
    }

    /// Returns the subject of the employee who raised the request.
    #[must_use]
    pub fn requester(&self) -> &NonEmptyString {
        &self.requester
    }

    /// Returns the request category.
    #[must_use]
    pub fn kind(&self) -> HrRequestKind {
        self.kind
    }

    /// Returns the short title.
    #[must_use]
    pub fn title(&self) -> &NonEmptyString {
        &self.title
    }

    /// Returns the optional free-text description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the review state.
    #[must_use]
    pub fn status(&self) -> HrRequestStatus {
        self.status
    }

    /// Returns when the request was raised.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
