//! DTOs for profile endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::Profile;

/// Full profile as returned by `GET /api/v1/profiles/{device_id}`.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub device_id: String,
    pub my_clicks: i64,
    pub unlocked_cosmetics: Vec<String>,
    pub selected_cosmetic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            device_id: profile.device_id,
            my_clicks: profile.my_clicks,
            unlocked_cosmetics: profile.unlocked_cosmetics,
            selected_cosmetic: profile.selected_cosmetic,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
            schema_version: profile.schema_version,
        }
    }
}
