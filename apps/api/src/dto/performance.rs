use chrono::NaiveDate;
use hrdesk_application::OpenPerformanceCycleInput;
use hrdesk_core::AppError;
use hrdesk_domain::PerformanceCycle;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Incoming payload for opening a review cycle.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/open-performance-cycle-request.ts"
)]
pub struct OpenPerformanceCycleRequest {
    pub name: String,
    /// ISO date, `YYYY-MM-DD`.
    pub starts_on: String,
    /// ISO date, `YYYY-MM-DD`.
    pub ends_on: String,
}

impl TryFrom<OpenPerformanceCycleRequest> for OpenPerformanceCycleInput {
    type Error = AppError;

    fn try_from(value: OpenPerformanceCycleRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            starts_on: parse_date("starts_on", value.starts_on.as_str())?,
            ends_on: parse_date("ends_on", value.ends_on.as_str())?,
        })
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|error| AppError::Validation(format!("invalid {field} '{value}': {error}")))
}

/// API representation of a performance review cycle.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/performance-cycle-response.ts"
)]
pub struct PerformanceCycleResponse {
    pub id: String,
    pub name: String,
    pub starts_on: String,
    pub ends_on: String,
    pub status: String,
}

impl PerformanceCycleResponse {
    /// Builds the response with the status the cycle has on `today`.
    #[must_use]
    pub fn from_cycle(cycle: &PerformanceCycle, today: NaiveDate) -> Self {
        Self {
            id: cycle.id().to_string(),
            name: cycle.name().as_str().to_owned(),
            starts_on: cycle.starts_on().to_string(),
            ends_on: cycle.ends_on().to_string(),
            status: cycle.status_on(today).as_str().to_owned(),
        }
    }
}
