use async_trait::async_trait;
use hrdesk_application::DashboardRepository;
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::DashboardStats;
use sqlx::{FromRow, PgPool};

use crate::postgres_errors::storage_error;

/// PostgreSQL-backed dashboard aggregation.
#[derive(Clone)]
pub struct PostgresDashboardRepository {
    pool: PgPool,
}

impl PostgresDashboardRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DashboardRow {
    total_requests: i64,
    pending_requests: i64,
    approved_requests: i64,
    signed_contracts: i64,
    average_time_to_hire: f64,
}

fn count(value: i64, label: &str) -> AppResult<u64> {
    u64::try_from(value)
        .map_err(|_| AppError::Internal(format!("negative {label} count returned: {value}")))
}

#[async_trait]
impl DashboardRepository for PostgresDashboardRepository {
    async fn get_stats(&self) -> AppResult<DashboardStats> {
        let row = sqlx::query_as::<_, DashboardRow>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM hr_requests) AS total_requests,
                (SELECT COUNT(*) FROM hr_requests WHERE status = 'pending') AS pending_requests,
                (SELECT COUNT(*) FROM hr_requests WHERE status = 'approved') AS approved_requests,
                (SELECT COUNT(*) FROM contracts WHERE status = 'signed') AS signed_contracts,
                COALESCE(
                    (
                        SELECT AVG(EXTRACT(EPOCH FROM (hired_at - applied_at)) / 86400.0)
                        FROM candidates
                        WHERE hired_at IS NOT NULL
                    ),
                    0
                )::DOUBLE PRECISION AS average_time_to_hire
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|error| storage_error("load dashboard stats", error))?;

        Ok(DashboardStats {
            total_requests: count(row.total_requests, "request")?,
            pending_requests: count(row.pending_requests, "pending request")?,
            approved_requests: count(row.approved_requests, "approved request")?,
            signed_contracts: count(row.signed_contracts, "signed contract")?,
            average_time_to_hire: row.average_time_to_hire,
        })
    }
}
