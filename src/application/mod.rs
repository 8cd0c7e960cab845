//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and business rules. Services consume repository traits and provide
//! a clean API for HTTP handlers and the admin CLI.
//!
//! # Available Services
//!
//! - [`services::profile_service::ProfileService`] - Get-or-create profiles
//! - [`services::click_service::ClickService`] - Click increments and the global counter
//! - [`services::cosmetic_service::CosmeticService`] - Unlocking and selecting cosmetics

pub mod services;
