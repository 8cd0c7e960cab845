//! Classification helpers for `sqlx` errors.

/// SQLSTATE for `serialization_failure`.
const SERIALIZATION_FAILURE: &str = "40001";
/// SQLSTATE for `deadlock_detected`.
const DEADLOCK_DETECTED: &str = "40P01";

/// Returns true if a failed transaction can be retried as a whole.
///
/// Covers serialization failures, deadlocks, and pool acquire timeouts. All
/// of these happen before commit, so the transaction was rolled back and
/// replaying it cannot double-apply an increment.
pub fn is_retryable_transaction_error(e: &sqlx::Error) -> bool {
    if matches!(e, sqlx::Error::PoolTimedOut) {
        return true;
    }

    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    matches!(
        db_err.code().as_deref(),
        Some(SERIALIZATION_FAILURE) | Some(DEADLOCK_DETECTED)
    )
}
