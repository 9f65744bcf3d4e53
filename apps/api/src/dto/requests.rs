use hrdesk_application::{RecordApprovalInput, SubmitHrRequestInput};
use hrdesk_core::AppError;
use hrdesk_domain::{Approval, ApprovalDecision, HrRequest, HrRequestId, HrRequestKind};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for raising an HR request.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/submit-hr-request-request.ts"
)]
pub struct SubmitHrRequestRequest {
    /// One of `leave`, `equipment`, `training`, `expense`, `other`.
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
}

impl TryFrom<SubmitHrRequestRequest> for SubmitHrRequestInput {
    type Error = AppError;

    fn try_from(value: SubmitHrRequestRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            kind: HrRequestKind::parse(value.kind.as_str())?,
            title: value.title,
            description: value.description,
        })
    }
}

/// Query string for request listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListHrRequestsQuery {
    /// Restricts reviewers to their own requests.
    #[serde(default)]
    pub mine: bool,
}

/// API representation of an HR request.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/hr-request-response.ts"
)]
pub struct HrRequestResponse {
    pub id: String,
    pub requester: String,
    pub kind: String,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub created_at: String,
}

impl From<HrRequest> for HrRequestResponse {
    fn from(request: HrRequest) -> Self {
        Self {
            id: request.id().to_string(),
            requester: request.requester().as_str().to_owned(),
            kind: request.kind().as_str().to_owned(),
            title: request.title().as_str().to_owned(),
            description: request.description().map(ToOwned::to_owned),
            status: request.status().as_str().to_owned(),
            created_at: request.created_at().to_rfc3339(),
        }
    }
}

/// Incoming payload for an approval decision.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/record-approval-request.ts"
)]
pub struct RecordApprovalRequest {
    /// Either `approved` or `rejected`.
    pub decision: String,
    pub comment: Option<String>,
}

impl RecordApprovalRequest {
    pub fn into_input(self, request_id: HrRequestId) -> Result<RecordApprovalInput, AppError> {
        Ok(RecordApprovalInput {
            request_id,
            decision: ApprovalDecision::parse(self.decision.as_str())?,
            comment: self.comment,
        })
    }
}

/// API representation of an approval decision.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/approval-response.ts"
)]
pub struct ApprovalResponse {
    pub id: String,
    pub request_id: String,
    pub approver: String,
    pub approver_role: String,
    pub decision: String,
    pub comment: Option<String>,
    pub decided_at: String,
}

impl From<Approval> for ApprovalResponse {
    fn from(approval: Approval) -> Self {
        Self {
            id: approval.id().to_string(),
            request_id: approval.request_id().to_string(),
            approver: approval.approver().as_str().to_owned(),
            approver_role: approval.approver_role().as_str().to_owned(),
            decision: approval.decision().as_str().to_owned(),
            comment: approval.comment().map(|comment| comment.as_str().to_owned()),
            decided_at: approval.decided_at().to_rfc3339(),
        }
    }
}
