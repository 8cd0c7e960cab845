//! Handlers for cosmetic unlock and selection.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::cosmetic::{
    SelectCosmeticRequest, SelectCosmeticResponse, UnlockCosmeticRequest, UnlockCosmeticResponse,
};
use crate::error::AppError;
use crate::state::AppState;

/// Selects an unlocked cosmetic.
///
/// # Endpoint
///
/// `PUT /api/v1/cosmetics/selected`
///
/// # Request Body
///
/// ```json
/// { "device_id": "test-device-12345", "selected_cosmetic": "neon" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: cosmetic is not unlocked, or malformed ids
/// - **404 Not Found**: unknown device
pub async fn select_cosmetic_handler(
    State(state): State<AppState>,
    Json(payload): Json<SelectCosmeticRequest>,
) -> Result<Json<SelectCosmeticResponse>, AppError> {
    payload.validate()?;

    let profile = state
        .cosmetic_service
        .select_cosmetic(&payload.device_id, &payload.selected_cosmetic)
        .await?;

    Ok(Json(profile.into()))
}

/// Unlocks a cosmetic. Unlocking twice is a no-op.
///
/// # Endpoint
///
/// `POST /api/v1/cosmetics/unlock`
///
/// # Request Body
///
/// ```json
/// { "device_id": "test-device-12345", "cosmetic_id": "neon" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: malformed ids
/// - **404 Not Found**: unknown device
pub async fn unlock_cosmetic_handler(
    State(state): State<AppState>,
    Json(payload): Json<UnlockCosmeticRequest>,
) -> Result<Json<UnlockCosmeticResponse>, AppError> {
    payload.validate()?;

    let profile = state
        .cosmetic_service
        .unlock_cosmetic(&payload.device_id, &payload.cosmetic_id)
        .await?;

    Ok(Json(profile.into()))
}
