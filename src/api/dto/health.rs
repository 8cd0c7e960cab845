//! DTOs for health check endpoints.

use serde::Serialize;

/// Liveness response: the process is up and serving.
#[derive(Debug, Serialize)]
pub struct LivenessResponse {
    pub status: String,
}

/// Readiness response with the storage backend status.
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub storage: String,
    pub version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
