use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hrdesk_application::HrRequestRepository;
use hrdesk_core::AppResult;
use hrdesk_domain::{HrRequest, HrRequestId, HrRequestKind, HrRequestStatus};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::postgres_errors::storage_error;

/// PostgreSQL-backed HR request repository.
#[derive(Clone)]
pub struct PostgresHrRequestRepository {
    pool: PgPool,
}

impl PostgresHrRequestRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HrRequestRow {
    id: Uuid,
    requester: String,
    kind: String,
    title: String,
    description: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
}

impl HrRequestRow {
    fn into_request(self) -> AppResult<HrRequest> {
        HrRequest::restore(
            HrRequestId::from_uuid(self.id),
            self.requester,
            HrRequestKind::parse(self.kind.as_str())?,
            self.title,
            self.description,
            HrRequestStatus::parse(self.status.as_str())?,
            self.created_at,
        )
    }
}

#[async_trait]
impl HrRequestRepository for PostgresHrRequestRepository {
    async fn save(&self, request: HrRequest) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO hr_requests (id, requester, kind, title, description, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE
            SET kind = EXCLUDED.kind,
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                status = EXCLUDED.status
            "#,
        )
        .bind(request.id().as_uuid())
        .bind(request.requester().as_str())
        .bind(request.kind().as_str())
        .bind(request.title().as_str())
        .bind(request.description())
        .bind(request.status().as_str())
        .bind(request.created_at())
        .execute(&self.pool)
        .await
        .map_err(|error| storage_error("save hr request", error))?;

        Ok(())
    }

    async fn find_by_id(&self, request_id: HrRequestId) -> AppResult<Option<HrRequest>> {
        let row = sqlx::query_as::<_, HrRequestRow>(
            r#"
            SELECT id, requester, kind, title, description, status, created_at
            FROM hr_requests
            WHERE id = $1
            "#,
        )
        .bind(request_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| storage_error("find hr request", error))?;

        row.map(HrRequestRow::into_request).transpose()
    }

    async fn list(&self) -> AppResult<Vec<HrRequest>> {
        let rows = sqlx::query_as::<_, HrRequestRow>(
            r#"
            SELECT id, requester, kind, title, description, status, created_at
            FROM hr_requests
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list hr requests", error))?;

        rows.into_iter().map(HrRequestRow::into_request).collect()
    }

    async fn list_by_requester(&self, requester: &str) -> AppResult<Vec<HrRequest>> {
        let rows = sqlx::query_as::<_, HrRequestRow>(
            r#"
            SELECT id, requester, kind, title, description, status, created_at
            FROM hr_requests
            WHERE requester = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(requester)
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list hr requests by requester", error))?;

        rows.into_iter().map(HrRequestRow::into_request).collect()
    }
}
