//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod clicks;
pub mod cosmetics;
pub mod health;
pub mod profiles;
pub mod state;

pub use clicks::increment_clicks_handler;
pub use cosmetics::{select_cosmetic_handler, unlock_cosmetic_handler};
pub use health::{liveness_handler, readiness_handler};
pub use profiles::get_profile_handler;
pub use state::global_state_handler;
