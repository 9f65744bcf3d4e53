use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hrdesk_application::ApprovalRepository;
use hrdesk_core::{AppError, AppResult, Role};
use hrdesk_domain::{Approval, ApprovalDecision, ApprovalId, HrRequestId, HrRequestStatus};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::postgres_errors::{is_foreign_key_violation, storage_error};


/// PostgreSQL-backed approval repository.
#[derive(Clone)]
pub struct PostgresApprovalRepository {
    pool: PgPool,
}

impl PostgresApprovalRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ApprovalRow {
    id: Uuid,
    request_id: Uuid,
    approver: String,
    approver_role: String,
    decision: String,
    comment: Option<String>,
    decided_at: DateTime<Utc>,
}

impl ApprovalRow {
    fn into_approval(self) -> AppResult<Approval> {
        Approval::restore(
            ApprovalId::from_uuid(self.id),
            HrRequestId::from_uuid(self.request_id),
            self.approver,
            Role::from_transport(self.approver_role.as_str())?,
            ApprovalDecision::parse(self.decision.as_str())?,
            self.comment,
            self.decided_at,
        )
    }
}

#[async_trait]
impl ApprovalRepository for PostgresApprovalRepository {
    async fn save(&self, approval: Approval) -> AppResult<()> {
        let request_id = approval.request_id();
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|error| storage_error("begin transaction", error))?;

        let settled = sqlx::query(
            r#"
            UPDATE hr_requests
            SET status = $2
            WHERE id = $1 AND status = $3
            "#,
        )
        .bind(request_id.as_uuid())
        .bind(approval.decision().resulting_request_status().as_str())
        .bind(HrRequestStatus::Pending.as_str())
        .execute(&mut *transaction)
        .await
        .map_err(|error| storage_error("settle hr request", error))?;

        if settled.rows_affected() == 0 {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM hr_requests WHERE id = $1)",
            )
            .bind(request_id.as_uuid())
            .fetch_one(&mut *transaction)
            .await
            .map_err(|error| storage_error("check hr request", error))?;

            return Err(if exists {
                AppError::Conflict(format!("hr request '{request_id}' is no longer pending"))
            } else {
                AppError::NotFound(format!("hr request '{request_id}' not found"))
            });
        }

        sqlx::query(
            r#"
            INSERT INTO hr_request_approvals (
                id,
                request_id,
                approver,
                approver_role,
                decision,
                comment,
                decided_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(approval.id().as_uuid())
        .bind(request_id.as_uuid())
        .bind(approval.approver().as_str())
        .bind(approval.approver_role().as_str())
        .bind(approval.decision().as_str())
        .bind(approval.comment().map(|comment| comment.as_str()))
        .bind(approval.decided_at())
        .execute(&mut *transaction)
        .await
        .map_err(|error| {
            if is_foreign_key_violation(&error) {
                AppError::NotFound(format!("hr request '{request_id}' not found"))
            } else {
                storage_error("save approval", error)
            }
        })?;

        transaction
            .commit()
            .await
            .map_err(|error| storage_error("commit transaction", error))?;

        Ok(())
    }

    async fn find_by_request_id(&self, request_id: HrRequestId) -> AppResult<Vec<Approval>> {
        let rows = sqlx::query_as::<_, ApprovalRow>(
            r#"
            SELECT id, request_id, approver, approver_role, decision, comment, decided_at
            FROM hr_request_approvals
            WHERE request_id = $1
            ORDER BY decided_at
            "#,
        )
        .bind(request_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list approvals", error))?;

        rows.into_iter().map(ApprovalRow::into_approval).collect()
    }
}
