//! Atomic dual increment of a profile and the global counter.

use crate::domain::entities::{GlobalState, Profile};
use crate::error::AppError;
use async_trait::async_trait;

/// Post-increment snapshot of both counters.
#[derive(Debug, Clone)]
pub struct ClickOutcome {
    pub profile: Profile,
    pub global_state: GlobalState,
}

/// Applies one click delta to a profile and to the global counter as a unit.
///
/// Implementations create the profile if it is missing and add the same
/// `delta` to both counters. Either both increments are applied or neither
/// is, and a read of the global counter never trails a profile increment
/// that has already been observed.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryClickLedger`]
/// - [`crate::infrastructure::persistence::PgClickLedger`] - single transaction
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickLedger: Send + Sync {
    /// Records `delta` clicks for `device_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] if the unit could not be
    /// committed. Nothing is left partially applied.
    async fn record_clicks(&self, device_id: &str, delta: i64) -> Result<ClickOutcome, AppError>;
}
