//! PostgreSQL dual increment in a single transaction.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::repositories::{ClickLedger, ClickOutcome};
use crate::error::AppError;
use crate::utils::db_error::is_retryable_transaction_error;

use super::{PgGlobalStateRepository, PgProfileRepository};

/// Retries after the first attempt for transient transaction failures.
const MAX_RETRIES: usize = 3;

/// Records clicks with both counter updates in one transaction.
///
/// A failure anywhere rolls the whole unit back (the transaction is dropped
/// without commit). Transient failures are replayed as a unit; see
/// [`is_retryable_transaction_error`].
pub struct PgClickLedger {
    pool: Arc<PgPool>,
}

impl PgClickLedger {
    /// Creates a new ledger with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn record_once(&self, device_id: &str, delta: i64) -> Result<ClickOutcome, sqlx::Error> {
        let mut tx = self.pool.begin().await?;

        let profile = PgProfileRepository::increment_clicks_on(&mut tx, device_id, delta).await?;
        let global_state = PgGlobalStateRepository::increment_clicks_on(&mut tx, delta).await?;

        tx.commit().await?;

        Ok(ClickOutcome {
            profile,
            global_state,
        })
    }
}

#[async_trait]
impl ClickLedger for PgClickLedger {
    async fn record_clicks(&self, device_id: &str, delta: i64) -> Result<ClickOutcome, AppError> {
        let strategy = ExponentialBackoff::from_millis(2)
            .factor(10)
            .max_delay(Duration::from_millis(250))
            .map(jitter)
            .take(MAX_RETRIES);

        let outcome = RetryIf::spawn(
            strategy,
            || self.record_once(device_id, delta),
            |e: &sqlx::Error| {
                let retryable = is_retryable_transaction_error(e);
                if retryable {
                    tracing::warn!(device_id, error = %e, "click transaction failed, retrying");
                }
                retryable
            },
        )
        .await?;

        Ok(outcome)
    }
}
