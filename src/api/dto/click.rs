//! DTOs for the click increment endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::services::click_service::{MAX_DELTA, MIN_DELTA};
use crate::domain::repositories::ClickOutcome;

fn default_delta() -> i64 {
    MIN_DELTA
}

/// Request body for `POST /api/v1/clicks/increment`.
///
/// `delta` defaults to 1. Clients may batch up to [`MAX_DELTA`] rapid
/// clicks into one request.
#[derive(Debug, Deserialize, Validate)]
pub struct IncrementClicksRequest {
    #[validate(length(min = 1, max = 255))]
    pub device_id: String,

    #[serde(default = "default_delta")]
    #[validate(range(min = MIN_DELTA, max = MAX_DELTA))]
    pub delta: i64,
}

/// Counters after the increment was applied.
#[derive(Debug, Serialize)]
pub struct IncrementClicksResponse {
    pub device_id: String,
    pub my_clicks: i64,
    pub global_clicks: i64,
    pub selected_cosmetic: String,
    pub unlocked_cosmetics: Vec<String>,
    /// Time the profile counter was updated.
    pub occurred_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl From<ClickOutcome> for IncrementClicksResponse {
    fn from(outcome: ClickOutcome) -> Self {
        let ClickOutcome {
            profile,
            global_state,
        } = outcome;

        Self {
            device_id: profile.device_id,
            my_clicks: profile.my_clicks,
            global_clicks: global_state.global_clicks,
            selected_cosmetic: profile.selected_cosmetic,
            unlocked_cosmetics: profile.unlocked_cosmetics,
            occurred_at: profile.updated_at,
            schema_version: profile.schema_version,
        }
    }
}
