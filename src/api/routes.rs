//! API route configuration.
//!
//! Mounted under `/api/v1` by [`crate::routes::app_router`].

use crate::api::handlers::{
    get_profile_handler, global_state_handler, increment_clicks_handler, liveness_handler,
    readiness_handler, select_cosmetic_handler, unlock_cosmetic_handler,
};
use crate::api::middleware::rate_limit;
use crate::state::AppState;
use anyhow::Result;
use axum::{
    Router,
    routing::{get, post, put},
};

/// Version 1 API routes.
///
/// # Endpoints
///
/// - `GET  /profiles/{device_id}` - Get or create a profile
/// - `POST /clicks/increment`     - Add clicks (rate limited per IP)
/// - `PUT  /cosmetics/selected`   - Select an unlocked cosmetic
/// - `POST /cosmetics/unlock`     - Unlock a cosmetic
/// - `GET  /state/global`         - Global click counter
/// - `GET  /health/live`          - Liveness probe
/// - `GET  /health/ready`         - Readiness probe (checks storage)
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn v1_routes(click_rate_per_second: u64, click_rate_burst: u32) -> Result<Router<AppState>> {
    let clicks = Router::new()
        .route("/clicks/increment", post(increment_clicks_handler))
        .layer(rate_limit::click_layer(
            click_rate_per_second,
            click_rate_burst,
        )?);

    let router = Router::new()
        .route("/profiles/{device_id}", get(get_profile_handler))
        .route("/cosmetics/selected", put(select_cosmetic_handler))
        .route("/cosmetics/unlock", post(unlock_cosmetic_handler))
        .route("/state/global", get(global_state_handler))
        .route("/health/live", get(liveness_handler))
        .route("/health/ready", get(readiness_handler))
        .merge(clicks);

    Ok(router)
}
