//! DTOs for cosmetic unlock and selection endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Profile;
use crate::utils::identifiers::COSMETIC_ID_REGEX;

/// Request body for `PUT /api/v1/cosmetics/selected`.
#[derive(Debug, Deserialize, Validate)]
pub struct SelectCosmeticRequest {
    #[validate(length(min = 1, max = 255))]
    pub device_id: String,

    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*COSMETIC_ID_REGEX"))]
    pub selected_cosmetic: String,
}

#[derive(Debug, Serialize)]
pub struct SelectCosmeticResponse {
    pub device_id: String,
    pub selected_cosmetic: String,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl From<Profile> for SelectCosmeticResponse {
    fn from(profile: Profile) -> Self {
        Self {
            device_id: profile.device_id,
            selected_cosmetic: profile.selected_cosmetic,
            updated_at: profile.updated_at,
            schema_version: profile.schema_version,
        }
    }
}

/// Request body for `POST /api/v1/cosmetics/unlock`.
#[derive(Debug, Deserialize, Validate)]
pub struct UnlockCosmeticRequest {
    #[validate(length(min = 1, max = 255))]
    pub device_id: String,

    #[validate(length(min = 1, max = 64))]
    #[validate(regex(path = "*COSMETIC_ID_REGEX"))]
    pub cosmetic_id: String,
}

#[derive(Debug, Serialize)]
pub struct UnlockCosmeticResponse {
    pub device_id: String,
    pub unlocked_cosmetics: Vec<String>,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl From<Profile> for UnlockCosmeticResponse {
    fn from(profile: Profile) -> Self {
        Self {
            device_id: profile.device_id,
            unlocked_cosmetics: profile.unlocked_cosmetics,
            updated_at: profile.updated_at,
            schema_version: profile.schema_version,
        }
    }
}
