use async_trait::async_trait;
use chrono::NaiveDate;
use hrdesk_application::PerformanceCycleRepository;
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::{PerformanceCycle, PerformanceCycleId};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::postgres_errors::{is_unique_violation, storage_error};

/// PostgreSQL-backed performance cycle repository.
#[derive(Clone)]
pub struct PostgresPerformanceCycleRepository {
    pool: PgPool,
}

impl PostgresPerformanceCycleRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PerformanceCycleRow {
    id: Uuid,
    name: String,
    starts_on: NaiveDate,
    ends_on: NaiveDate,
}

impl PerformanceCycleRow {
    fn into_cycle(self) -> AppResult<PerformanceCycle> {
        PerformanceCycle::restore(
            PerformanceCycleId::from_uuid(self.id),
            self.name,
            self.starts_on,
            self.ends_on,
        )
    }
}

#[async_trait]
impl PerformanceCycleRepository for PostgresPerformanceCycleRepository {
    async fn save(&self, cycle: PerformanceCycle) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO performance_cycles (id, name, starts_on, ends_on)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE
            SET name = EXCLUDED.name,
                starts_on = EXCLUDED.starts_on,
                ends_on = EXCLUDED.ends_on
            "#,
        )
        .bind(cycle.id().as_uuid())
        .bind(cycle.name().as_str())
        .bind(cycle.starts_on())
        .bind(cycle.ends_on())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if is_unique_violation(&error) {
                AppError::Conflict(format!(
                    "performance cycle '{}' already exists",
                    cycle.name()
                ))
            } else {
                storage_error("save performance cycle", error)
            }
        })?;

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<PerformanceCycle>> {
        let rows = sqlx::query_as::<_, PerformanceCycleRow>(
            r#"
            SELECT id, name, starts_on, ends_on
            FROM performance_cycles
            ORDER BY starts_on DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list performance cycles", error))?;

        rows.into_iter().map(PerformanceCycleRow::into_cycle).collect()
    }
}
