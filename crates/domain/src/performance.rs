use chrono::NaiveDate;
use hrdesk_core::{AppError, AppResult, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::PerformanceCycleId;

/// Lifecycle state of a performance review cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceCycleStatus {
    /// Scheduled but not started.
    Planned,
    /// Reviews are being collected.
    Open,
    /// Reviews are final.
    Closed,
}

impl PerformanceCycleStatus {
    /// Returns the transport string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Derives the status of a cycle window on `today`.
    #[must_use]
    pub fn for_window(starts_on: NaiveDate, ends_on: NaiveDate, today: NaiveDate) -> Self {
        if today < starts_on {
            Self::Planned
        } else if today <= ends_on {
            Self::Open
        } else {
            Self::Closed
        }
    }
}

/// Time-boxed performance review cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCycle {
    id: PerformanceCycleId,
    name: NonEmptyString,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
}

impl PerformanceCycle {
    /// Creates a cycle over an inclusive date window.
    pub fn new(
        name: impl Into<String>,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    ) -> AppResult<Self> {
        Self::restore(PerformanceCycleId::new(), name, starts_on, ends_on)
    }

    /// Rebuilds a cycle from persisted values.
    pub fn restore(
        id: PerformanceCycleId,
        name: impl Into<String>,
        starts_on: NaiveDate,
        ends_on: NaiveDate,
    ) -> AppResult<Self> {
        validate_window(starts_on, ends_on)?;

        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            starts_on,
            ends_on,
        })
    }

    /// Returns the cycle id.
    #[must_use]
    pub fn id(&self) -> PerformanceCycleId {
        self.id
    }

    /// Returns the cycle name.
    #[must_use]
    pub fn name(&self) -> &NonEmptyString {
        &self.name
    }

    /// Returns the first day of the cycle.
    #[must_use]
    pub fn starts_on(&self) -> NaiveDate {
        self.starts_on
    }

    /// Returns the last day of the cycle.
    #[must_use]
    pub fn ends_on(&self) -> NaiveDate {
        self.ends_on
    }

    /// Returns the lifecycle state on `today`; never stored.
    #[must_use]
    pub fn status_on(&self, today: NaiveDate) -> PerformanceCycleStatus {
        PerformanceCycleStatus::for_window(self.starts_on, self.ends_on, today)
    }
}

fn validate_window(starts_on: NaiveDate, ends_on: NaiveDate) -> AppResult<()> {
    if ends_on <= starts_on {
        return Err(AppError::Validation(format!(
            "cycle must end after it starts (starts_on={starts_on}, ends_on={ends_on})"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{PerformanceCycle, PerformanceCycleStatus};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
    }

    #[test]
    fn inverted_window_is_rejected() {
        let cycle = PerformanceCycle::new("H1", date(2026, 6, 30), date(2026, 1, 1));
        assert!(cycle.is_err());
    }

    #[test]
    fn cycle_status_moves_with_the_calendar() {
        let cycle = PerformanceCycle::new("Q1", date(2026, 1, 1), date(2026, 3, 31));
        assert!(cycle.is_ok());
        let cycle = cycle.unwrap_or_else(|_| unreachable!());

        assert_eq!(
            cycle.status_on(date(2025, 12, 1)),
            PerformanceCycleStatus::Planned
        );
        assert_eq!(cycle.status_on(date(2026, 2, 14)), PerformanceCycleStatus::Open);
        assert_eq!(
            cycle.status_on(date(2026, 10, 19)),
            PerformanceCycleStatus::Closed
        );
    }

    #[test]
    fn status_follows_window() {
        let starts_on = date(2026, 1, 1);
        let ends_on = date(2026, 6, 30);

        assert_eq!(
            PerformanceCycleStatus::for_window(starts_on, ends_on, date(2025, 12, 31)),
            PerformanceCycleStatus::Planned
        );
        assert_eq!(
            PerformanceCycleStatus::for_window(starts_on, ends_on, ends_on),
            PerformanceCycleStatus::Open
        );
        assert_eq!(
            PerformanceCycleStatus::for_window(starts_on, ends_on, date(2026, 7, 1)),
            PerformanceCycleStatus::Closed
        );
    }
}
