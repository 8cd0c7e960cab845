//! Core domain entities.
//!
//! - [`Profile`] - Per-device click count and cosmetics
//! - [`GlobalState`] - Singleton aggregate click counter
//!
//! Entities carry no behavior beyond defaults and invariant normalization.

pub mod global_state;
pub mod profile;

pub use global_state::GlobalState;
pub use profile::{DEFAULT_COSMETIC, Profile};

/// Version stamped on every outbound record for forward compatibility.
pub const SCHEMA_VERSION: i32 = 1;
