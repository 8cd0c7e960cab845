//! Handler for click increments.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::click::{IncrementClicksRequest, IncrementClicksResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Adds clicks to a device and to the global counter.
///
/// # Endpoint
///
/// `POST /api/v1/clicks/increment`
///
/// The profile is created on the first click. Rate limited per client IP.
///
/// # Request Body
///
/// ```json
/// {
///   "device_id": "test-device-12345",
///   "delta": 3    // optional, 1-10, default 1
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "device_id": "test-device-12345",
///   "my_clicks": 3,
///   "global_clicks": 1042,
///   "selected_cosmetic": "default",
///   "unlocked_cosmetics": ["default"],
///   "occurred_at": "2026-01-01T00:00:00Z",
///   "schema_version": 1
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `delta` out of range or invalid device id
/// - **429 Too Many Requests**: rate limit exceeded
/// - **503 Service Unavailable**: the increment could not be committed
pub async fn increment_clicks_handler(
    State(state): State<AppState>,
    Json(payload): Json<IncrementClicksRequest>,
) -> Result<Json<IncrementClicksResponse>, AppError> {
    payload.validate()?;

    let outcome = state
        .click_service
        .increment_clicks(&payload.device_id, payload.delta)
        .await?;

    Ok(Json(outcome.into()))
}
