use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hrdesk_application::ContractRepository;
use hrdesk_core::{AppError, AppResult};
use hrdesk_domain::{CandidateId, Contract, ContractId, ContractStatus};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::postgres_errors::{is_foreign_key_violation, storage_error};

/// PostgreSQL-backed contract repository.
#[derive(Clone)]
pub struct PostgresContractRepository {
    pool: PgPool,
}

impl PostgresContractRepository {
    /// Creates a repository with the provided connection pool.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ContractRow {
    id: Uuid,
    employee_name: String,
    candidate_id: Option<Uuid>,
    position: String,
    annual_salary_cents: i64,
    status: String,
    created_at: DateTime<Utc>,
    signed_at: Option<DateTime<Utc>>,
}

impl ContractRow {
    fn into_contract(self) -> AppResult<Contract> {
        Contract::restore(
            ContractId::from_uuid(self.id),
            self.employee_name,
            self.candidate_id.map(CandidateId::from_uuid),
            self.position,
            self.annual_salary_cents,
            ContractStatus::parse(self.status.as_str())?,
            self.created_at,
            self.signed_at,
        )
    }
}

#[async_trait]
impl ContractRepository for PostgresContractRepository {
    async fn save(&self, contract: Contract) -> AppResult<()> {
        let candidate_id = contract.candidate_id();

        sqlx::query(
            r#"
            INSERT INTO contracts (
                id,
                employee_name,
                candidate_id,
                position,
                annual_salary_cents,
                status,
                created_at,
                signed_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE
            SET employee_name = EXCLUDED.employee_name,
                candidate_id = EXCLUDED.candidate_id,
                position = EXCLUDED.position,
                annual_salary_cents = EXCLUDED.annual_salary_cents,
                status = EXCLUDED.status,
                signed_at = EXCLUDED.signed_at
            "#,
        )
        .bind(contract.id().as_uuid())
        .bind(contract.employee_name().as_str())
        .bind(candidate_id.map(|id| id.as_uuid()))
        .bind(contract.position().as_str())
        .bind(contract.annual_salary_cents())
        .bind(contract.status().as_str())
        .bind(contract.created_at())
        .bind(contract.signed_at())
        .execute(&self.pool)
        .await
        .map_err(|error| {
            if is_foreign_key_violation(&error) {
                AppError::Validation(format!(
                    "candidate '{}' does not exist",
                    candidate_id.map(|id| id.to_string()).unwrap_or_default()
                ))
            } else {
                storage_error("save contract", error)
            }
        })?;

        Ok(())
    }

    async fn find_by_id(&self, contract_id: ContractId) -> AppResult<Option<Contract>> {
        let row = sqlx::query_as::<_, ContractRow>(
            r#"
            SELECT id, employee_name, candidate_id, position, annual_salary_cents,
                   status, created_at, signed_at
            FROM contracts
            WHERE id = $1
            "#,
        )
        .bind(contract_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|error| storage_error("find contract", error))?;

        row.map(ContractRow::into_contract).transpose()
    }

    async fn list(&self) -> AppResult<Vec<Contract>> {
        let rows = sqlx::query_as::<_, ContractRow>(
            r#"
            SELECT id, employee_name, candidate_id, position, annual_salary_cents,
                   status, created_at, signed_at
            FROM contracts
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|error| storage_error("list contracts", error))?;

        rows.into_iter().map(ContractRow::into_contract).collect()
    }
}
