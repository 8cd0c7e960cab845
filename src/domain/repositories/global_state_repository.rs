//! Repository trait for the global click counter.

use crate::domain::entities::GlobalState;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage capability for the singleton [`GlobalState`].
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryGlobalStateRepository`]
/// - [`crate::infrastructure::persistence::PgGlobalStateRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GlobalStateRepository: Send + Sync {
    /// Returns the counter, materializing it with `global_clicks = 0` if absent.
    async fn get_state(&self) -> Result<GlobalState, AppError>;

    /// Atomically adds `delta` and returns the new state.
    ///
    /// Range checks on `delta` belong to the caller. Safe under any number of
    /// concurrent callers: no increment is ever lost.
    async fn increment_clicks(&self, delta: i64) -> Result<GlobalState, AppError>;
}
