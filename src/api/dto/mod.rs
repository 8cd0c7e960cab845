//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Response types convert from domain entities via
//! `From`.

pub mod click;
pub mod cosmetic;
pub mod global_state;
pub mod health;
pub mod profile;
