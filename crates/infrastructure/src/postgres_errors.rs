use hrdesk_core::AppError;
use tracing::warn;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Wraps a driver failure as a storage error naming the failed action.
pub(crate) fn storage_error(action: &str, error: sqlx::Error) -> AppError {
    warn!(action, error = %error, "postgres operation failed");
    AppError::Storage(format!("failed to {action}: {error}"))
}

pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    has_code(error, UNIQUE_VIOLATION)
}

pub(crate) fn is_foreign_key_violation(error: &sqlx::Error) -> bool {
    has_code(error, FOREIGN_KEY_VIOLATION)
}

fn has_code(error: &sqlx::Error, code: &str) -> bool {
    matches!(
        error,
        sqlx::Error::Database(database_error) if database_error.code().as_deref() == Some(code)
    )
}
