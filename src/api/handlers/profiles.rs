//! Handler for profile lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::profile::ProfileResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the profile for a device, creating it on first access.
///
/// # Endpoint
///
/// `GET /api/v1/profiles/{device_id}`
///
/// # Response
///
/// ```json
/// {
///   "device_id": "test-device-12345",
///   "my_clicks": 0,
///   "unlocked_cosmetics": ["default"],
///   "selected_cosmetic": "default",
///   "created_at": "2026-01-01T00:00:00Z",
///   "updated_at": "2026-01-01T00:00:00Z",
///   "schema_version": 1
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: blank or oversized device id
/// - **503 Service Unavailable**: storage backend failure
pub async fn get_profile_handler(
    State(state): State<AppState>,
    Path(device_id): Path<String>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state
        .profile_service
        .get_or_create_profile(&device_id)
        .await?;

    Ok(Json(profile.into()))
}
