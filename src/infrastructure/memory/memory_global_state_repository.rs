//! In-memory implementation of the global counter.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::{Mutex, MutexGuard};

use crate::domain::entities::GlobalState;
use crate::domain::repositories::GlobalStateRepository;
use crate::error::AppError;

/// Process-local global counter.
///
/// Read-modify-write happens under a single mutex, so concurrent
/// increments never lose updates.
#[derive(Default)]
pub struct InMemoryGlobalStateRepository {
    state: Mutex<GlobalState>,
}

impl InMemoryGlobalStateRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Holds the counter lock so a caller can pair another write with it.
    pub(super) fn lock(&self) -> MutexGuard<'_, GlobalState> {
        self.state.lock()
    }
}

#[async_trait]
impl GlobalStateRepository for InMemoryGlobalStateRepository {
    async fn get_state(&self) -> Result<GlobalState, AppError> {
        Ok(self.state.lock().clone())
    }

    async fn increment_clicks(&self, delta: i64) -> Result<GlobalState, AppError> {
        let mut state = self.state.lock();
        state.global_clicks += delta;
        state.updated_at = Utc::now();
        Ok(state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_initial_state_is_zero() {
        let repo = InMemoryGlobalStateRepository::new();

        let state = repo.get_state().await.unwrap();

        assert_eq!(state.global_clicks, 0);
        assert_eq!(state.schema_version, 1);
    }

    #[tokio::test]
    async fn test_increment_returns_new_total() {
        let repo = InMemoryGlobalStateRepository::new();

        repo.increment_clicks(3).await.unwrap();
        let state = repo.increment_clicks(7).await.unwrap();

        assert_eq!(state.global_clicks, 10);
        assert_eq!(repo.get_state().await.unwrap().global_clicks, 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_increments_are_not_lost() {
        let repo = Arc::new(InMemoryGlobalStateRepository::new());

        let handles: Vec<_> = (1..=100)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move { repo.increment_clicks(i % 10 + 1).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        let expected: i64 = (1..=100).map(|i| i % 10 + 1).sum();
        assert_eq!(repo.get_state().await.unwrap().global_clicks, expected);
    }
}
