use serde::{Deserialize, Serialize};

/// Aggregated HR figures shown on the landing dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    /// Every request ever raised.
    pub total_requests: u64,
    /// Requests still awaiting a decision.
    pub pending_requests: u64,
    /// Requests that were approved.
    pub approved_requests: u64,
    /// Contracts carrying an employee signature.
    pub signed_contracts: u64,
    /// Mean days from application to hire; zero when nobody was hired yet.
    pub average_time_to_hire: f64,
}
