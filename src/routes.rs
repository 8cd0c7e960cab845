//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /healthz`  - Liveness probe (public)
//! - `/api/v1/*`      - JSON API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Configured front-end origins only
//! - **Rate limiting** - Per-IP token bucket on the click endpoint
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::liveness_handler;
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Errors
///
/// Returns an error if the rate limit settings in `config` are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let api_router =
        api::routes::v1_routes(config.click_rate_per_second, config.click_rate_burst)?;

    let router = Router::new()
        .route("/healthz", get(liveness_handler))
        .nest("/api/v1", api_router)
        .with_state(state)
        .layer(cors::layer(&config.cors_origins))
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
