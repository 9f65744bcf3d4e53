pub mod approvals;
pub mod candidates;
pub mod contracts;
pub mod dashboard;
pub mod health;
pub mod performance;
pub mod requests;
