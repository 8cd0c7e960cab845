//! In-memory dual increment.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::repositories::{ClickLedger, ClickOutcome};
use crate::error::AppError;

use super::{InMemoryGlobalStateRepository, InMemoryProfileRepository};

/// Applies click deltas to the in-memory profile and global stores.
///
/// The global counter lock is held while the profile is incremented, so a
/// reader of the global counter never observes a profile increment without
/// its matching global one. Lock order is always global, then profiles.
pub struct InMemoryClickLedger {
    profiles: Arc<InMemoryProfileRepository>,
    global: Arc<InMemoryGlobalStateRepository>,
}

impl InMemoryClickLedger {
    pub fn new(
        profiles: Arc<InMemoryProfileRepository>,
        global: Arc<InMemoryGlobalStateRepository>,
    ) -> Self {
        Self { profiles, global }
    }
}

#[async_trait]
impl ClickLedger for InMemoryClickLedger {
    async fn record_clicks(&self, device_id: &str, delta: i64) -> Result<ClickOutcome, AppError> {
        let mut global = self.global.lock();
        let profile = self.profiles.add_clicks(device_id, delta);

        global.global_clicks += delta;
        global.updated_at = Utc::now();
        let global_state = global.clone();
        drop(global);

        Ok(ClickOutcome {
            profile,
            global_state,
        })
    }
}
