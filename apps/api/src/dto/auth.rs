use hrdesk_core::SessionUser;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for trusted session issuance.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/bootstrap-session-request.ts"
)]
pub struct BootstrapSessionRequest {
    pub token: String,
    pub subject: String,
    /// One of `ADMIN`, `HR`, `MANAGER`, `FINANCE`, `CEO`, `HOD_HR`.
    pub role: String,
    pub display_name: Option<String>,
}

/// API representation of the signed-in user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/session-user-response.ts"
)]
pub struct SessionUserResponse {
    pub subject: String,
    pub display_name: String,
    pub role: String,
}

impl From<SessionUser> for SessionUserResponse {
    fn from(user: SessionUser) -> Self {
        Self {
            subject: user.id().to_owned(),
            display_name: user.display_name().to_owned(),
            role: user.role().as_str().to_owned(),
        }
    }
}
