//! Domain layer: entities and repository capability traits.
//!
//! # Architecture
//!
//! - [`entities`] - Plain data types ([`entities::Profile`], [`entities::GlobalState`])
//! - [`repositories`] - Storage capabilities implemented by
//!   `crate::infrastructure::memory` and `crate::infrastructure::persistence`
//!
//! Services in [`crate::application::services`] depend only on the traits in
//! [`repositories`], never on a concrete backend.

pub mod entities;
pub mod repositories;
