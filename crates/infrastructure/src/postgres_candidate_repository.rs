use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hrdesk_application::CandidateRepository;
use hrdesk_core::AppResult;
use hrdesk_domain::{Candidate, CandidateId, CandidateStatus};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::postgres_errors::storage_error;

/// PostgreSQL-backed candidate repository.
#[derive(Clone)]
pub struct PostgresCandidateRepository {
    pool: PgPool,
}

impl PostgresCandidateRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CandidateRow {
    id: Uuid,
    full_name: String,
    email: String,
    position: String,
    status: String,
    applied_at: DateTime<Utc>,
    hired_at: Option<DateTime<Utc>>,
}

impl CandidateRow {
    fn into_candidate(self) -> AppResult<Candidate> {
        Candidate::restore(
            CandidateId::from_uuid(self.id),
            self.full_name,
            self.email,
            self.position,
            CandidateStatus::parse(self.status.as_str())?,
            self.applied_at,
            self.hired_at,
        )
    }
}

#[async_trait]
impl CandidateRepository for PostgresCandidateRepository {
    async fn save(&self, candidate: Candidate) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO candidates (id, full_name, email, position, status, applied_at, hired_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET full_name = EXCLUDED.full_name,
                email = EXCLUDED.email,
                position = EXCLUDED.position,
                status = EXCLUDED.status,
                hired_at = EXCLUDED.hired_at
            "#,
        )
        .bind(candidate.id().as_uuid())
        .bind(candidate.full_name().as_str())
        .bind(candidate.email().as_str())
        .bind(candidate.position().as_str())
        .bind(candidate.status().as_str())
        .bind(candidate.applied_at())
        .bind(candidate.hired_at())
        .execute(&self.pool)
        .await
        .map_err(|error| storage_error("save candidate", error))?;

        Ok(())
    }

    async fn find_by_id(&self, candidate_id: CandidateId) -> AppResult<Option<Candidate>> {
        let row = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, full_name, email, position, status, applied_at, hired_at
            FROM candidates
            WHERE id = $1
            "#,
        )
        .bind(candidate_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| storage_error("find candidate", error))?;

        row.map(CandidateRow::into_candidate).transpose()
    }

    async fn list(&self) -> AppResult<Vec<Candidate>> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT id, full_name, email, position, status, applied_at, hired_at
            FROM candidates
            ORDER BY applied_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list candidates", error))?;

        rows.into_iter().map(CandidateRow::into_candidate).collect()
    }
}
