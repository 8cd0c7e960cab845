//! Helper functions shared across layers.
//!
//! - [`identifiers`] - Device and cosmetic id validation
//! - [`db_error`] - Classification of `sqlx` errors

pub mod db_error;
pub mod identifiers;
