//! Handler for the global counter.

use axum::{Json, extract::State};

use crate::api::dto::global_state::GlobalStateResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the global click counter.
///
/// # Endpoint
///
/// `GET /api/v1/state/global`
///
/// # Response
///
/// ```json
/// { "global_clicks": 1042, "updated_at": "2026-01-01T00:00:00Z", "schema_version": 1 }
/// ```
pub async fn global_state_handler(
    State(state): State<AppState>,
) -> Result<Json<GlobalStateResponse>, AppError> {
    let global_state = state.click_service.get_global_state().await?;
    Ok(Json(global_state.into()))
}
