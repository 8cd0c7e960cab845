//! Click counting service.

use std::sync::Arc;

use crate::domain::entities::GlobalState;
use crate::domain::repositories::{ClickLedger, ClickOutcome, GlobalStateRepository};
use crate::error::AppError;
use crate::utils::identifiers::validate_device_id;
use serde_json::json;

/// Smallest accepted click delta.
pub const MIN_DELTA: i64 = 1;

/// Largest accepted click delta. Clients batch rapid clicks up to this size.
pub const MAX_DELTA: i64 = 10;

/// Service for incrementing click counters and reading the global total.
///
/// The per-device and global increments go through a single
/// [`ClickLedger`] call so they are applied as one unit.
pub struct ClickService<L, G>
where
    L: ClickLedger + ?Sized,
    G: GlobalStateRepository + ?Sized,
{
    ledger: Arc<L>,
    global_state_repository: Arc<G>,
}

impl<L, G> ClickService<L, G>
where
    L: ClickLedger + ?Sized,
    G: GlobalStateRepository + ?Sized,
{
    /// Creates a new click service.
    pub fn new(ledger: Arc<L>, global_state_repository: Arc<G>) -> Self {
        Self {
            ledger,
            global_state_repository,
        }
    }

    /// Adds `delta` clicks to `device_id` and to the global counter.
    ///
    /// The profile is created with defaults if it does not exist. Both
    /// counters grow by exactly `delta`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `delta` is outside
    /// `MIN_DELTA..=MAX_DELTA` or the device id is invalid. Nothing is
    /// written in that case.
    ///
    /// Returns [`AppError::StorageUnavailable`] if the increment could not be
    /// committed.
    pub async fn increment_clicks(
        &self,
        device_id: &str,
        delta: i64,
    ) -> Result<ClickOutcome, AppError> {
        validate_delta(delta)?;
        validate_device_id(device_id)?;

        let outcome = self.ledger.record_clicks(device_id, delta).await?;

        metrics::counter!("button0_click_requests_total").increment(1);
        metrics::counter!("button0_clicks_total").increment(delta as u64);
        tracing::debug!(
            device_id,
            delta,
            my_clicks = outcome.profile.my_clicks,
            global_clicks = outcome.global_state.global_clicks,
            "clicks recorded"
        );

        Ok(outcome)
    }

    /// Returns the global counter.
    pub async fn get_global_state(&self) -> Result<GlobalState, AppError> {
        self.global_state_repository.get_state().await
    }
}

fn validate_delta(delta: i64) -> Result<(), AppError> {
    if !(MIN_DELTA..=MAX_DELTA).contains(&delta) {
        return Err(AppError::bad_request(
            format!("delta must be between {MIN_DELTA} and {MAX_DELTA}"),
            json!({ "delta": delta, "min": MIN_DELTA, "max": MAX_DELTA }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Profile;
    use crate::domain::repositories::{MockClickLedger, MockGlobalStateRepository};
    use chrono::Utc;

    fn create_outcome(device_id: &str, my_clicks: i64, global_clicks: i64) -> ClickOutcome {
        let mut profile = Profile::new(device_id);
        profile.my_clicks = my_clicks;

        ClickOutcome {
            profile,
            global_state: GlobalState::new(global_clicks, Utc::now()),
        }
    }

    #[tokio::test]
    async fn test_increment_clicks_passes_same_delta_through() {
        let mut mock_ledger = MockClickLedger::new();
        let mock_global = MockGlobalStateRepository::new();

        mock_ledger
            .expect_record_clicks()
            .withf(|device_id, delta| device_id == "device-1" && *delta == 3)
            .times(1)
            .returning(|device_id, delta| Ok(create_outcome(device_id, delta, 100 + delta)));

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        let outcome = service.increment_clicks("device-1", 3).await.unwrap();
        assert_eq!(outcome.profile.my_clicks, 3);
        assert_eq!(outcome.global_state.global_clicks, 103);
    }

    #[tokio::test]
    async fn test_increment_clicks_accepts_range_bounds() {
        let mut mock_ledger = MockClickLedger::new();
        let mock_global = MockGlobalStateRepository::new();

        mock_ledger
            .expect_record_clicks()
            .times(2)
            .returning(|device_id, delta| Ok(create_outcome(device_id, delta, delta)));

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        assert!(service.increment_clicks("device-1", MIN_DELTA).await.is_ok());
        assert!(service.increment_clicks("device-1", MAX_DELTA).await.is_ok());
    }

    #[tokio::test]
    async fn test_increment_clicks_rejects_out_of_range_before_mutation() {
        let mut mock_ledger = MockClickLedger::new();
        let mock_global = MockGlobalStateRepository::new();

        mock_ledger.expect_record_clicks().times(0);

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        for delta in [0, 11, -1, i64::MAX] {
            let result = service.increment_clicks("device-1", delta).await;
            assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
        }
    }

    #[tokio::test]
    async fn test_increment_clicks_rejects_blank_device() {
        let mut mock_ledger = MockClickLedger::new();
        let mock_global = MockGlobalStateRepository::new();

        mock_ledger.expect_record_clicks().times(0);

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        let result = service.increment_clicks("", 1).await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_increment_clicks_propagates_storage_failure() {
        let mut mock_ledger = MockClickLedger::new();
        let mock_global = MockGlobalStateRepository::new();

        mock_ledger.expect_record_clicks().times(1).returning(|_, _| {
            Err(AppError::storage_unavailable(
                "Storage backend unavailable",
                json!({}),
            ))
        });

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        let result = service.increment_clicks("device-1", 1).await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_get_global_state_reads_through() {
        let mock_ledger = MockClickLedger::new();
        let mut mock_global = MockGlobalStateRepository::new();

        mock_global
            .expect_get_state()
            .times(1)
            .returning(|| Ok(GlobalState::new(42, Utc::now())));

        let service = ClickService::new(Arc::new(mock_ledger), Arc::new(mock_global));

        let state = service.get_global_state().await.unwrap();
        assert_eq!(state.global_clicks, 42);
    }
}
