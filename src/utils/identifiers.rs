//! Validation of client-supplied identifiers.

use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Maximum length of a device id (matches the `profiles.device_id` column).
pub const MAX_DEVICE_ID_LEN: usize = 255;

/// Maximum length of a cosmetic id (matches the `cosmetic_id` columns).
pub const MAX_COSMETIC_ID_LEN: usize = 64;

/// Allowed cosmetic id characters: lowercase letters, digits, `_` and `-`.
pub static COSMETIC_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").expect("valid cosmetic id regex"));

/// Validates an opaque device id.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the id is blank or longer than
/// [`MAX_DEVICE_ID_LEN`] characters.
pub fn validate_device_id(device_id: &str) -> Result<(), AppError> {
    if device_id.trim().is_empty() {
        return Err(AppError::bad_request(
            "device_id must not be empty",
            json!({}),
        ));
    }

    let length = device_id.chars().count();
    if length > MAX_DEVICE_ID_LEN {
        return Err(AppError::bad_request(
            "device_id is too long",
            json!({ "max_length": MAX_DEVICE_ID_LEN, "provided_length": length }),
        ));
    }

    Ok(())
}

/// Validates a cosmetic identifier.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the id is empty, too long, or
/// contains characters outside `[a-z0-9_-]`.
pub fn validate_cosmetic_id(cosmetic_id: &str) -> Result<(), AppError> {
    let length = cosmetic_id.chars().count();
    if length == 0 || length > MAX_COSMETIC_ID_LEN {
        return Err(AppError::bad_request(
            "cosmetic_id must be 1-64 characters",
            json!({ "provided_length": length }),
        ));
    }

    if !COSMETIC_ID_REGEX.is_match(cosmetic_id) {
        return Err(AppError::bad_request(
            "cosmetic_id can only contain lowercase letters, digits, '_' and '-'",
            json!({ "cosmetic_id": cosmetic_id }),
        ));
    }

    Ok(())
}
