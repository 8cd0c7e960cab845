//! Handlers for liveness and readiness checks.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{LivenessResponse, ReadinessResponse};
use crate::state::AppState;

/// Liveness probe. Never touches storage.
///
/// # Endpoint
///
/// `GET /healthz`, `GET /api/v1/health/live`
pub async fn liveness_handler() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe.
///
/// # Endpoint
///
/// `GET /api/v1/health/ready`
///
/// # Response Codes
///
/// - **200 OK**: storage answered a global counter read
/// - **503 Service Unavailable**: storage is unreachable
///
/// # Response
///
/// ```json
/// { "status": "ok", "storage": "postgres", "version": "0.1.0" }
/// ```
pub async fn readiness_handler(
    State(state): State<AppState>,
) -> Result<Json<ReadinessResponse>, (StatusCode, Json<ReadinessResponse>)> {
    let storage = state.storage_mode.to_string();
    let version = env!("CARGO_PKG_VERSION").to_string();

    match state.click_service.get_global_state().await {
        Ok(_) => Ok(Json(ReadinessResponse {
            status: "ok".to_string(),
            storage,
            version,
            message: None,
        })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessResponse {
                    status: "degraded".to_string(),
                    storage,
                    version,
                    message: Some(e.to_string()),
                }),
            ))
        }
    }
}
