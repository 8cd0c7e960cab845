//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for the click endpoint.
///
/// # Limits
///
/// - **Rate**: `per_second` requests per second, sustained
/// - **Burst**: up to `burst` requests at once
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Errors
///
/// Returns an error if `per_second` or `burst` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let clicks = Router::new()
///     .route("/clicks/increment", post(increment_clicks_handler))
///     .layer(rate_limit::click_layer(20, 100)?);
/// ```
pub fn click_layer(
    per_second: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    // The builder takes a replenish interval, not a rate.
    let replenish_ms = 1000u64
        .checked_div(per_second)
        .context("Rate limit must allow at least one request per second")?
        .max(1);

    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(replenish_ms)
        .burst_size(burst)
        .finish()
        .context("Invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
