//! Profile entity representing one device installation.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use super::SCHEMA_VERSION;

/// Cosmetic every profile owns from creation.
pub const DEFAULT_COSMETIC: &str = "default";

/// Per-device state keyed by the client-generated `device_id`.
///
/// Invariants (restored by [`Profile::normalized`]):
/// - `unlocked_cosmetics` always contains [`DEFAULT_COSMETIC`] and has no duplicates
/// - `selected_cosmetic` is a member of `unlocked_cosmetics`
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub device_id: String,
    pub my_clicks: i64,
    /// Unlock order is preserved so responses are deterministic.
    pub unlocked_cosmetics: Vec<String>,
    pub selected_cosmetic: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl Profile {
    /// Creates a fresh profile with zero clicks and only the default cosmetic.
    pub fn new(device_id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            device_id: device_id.into(),
            my_clicks: 0,
            unlocked_cosmetics: vec![DEFAULT_COSMETIC.to_string()],
            selected_cosmetic: DEFAULT_COSMETIC.to_string(),
            created_at: now,
            updated_at: now,
            schema_version: SCHEMA_VERSION,
        }
    }

    /// Returns true if `cosmetic_id` is in the unlocked set.
    pub fn has_unlocked(&self, cosmetic_id: &str) -> bool {
        self.unlocked_cosmetics.iter().any(|c| c == cosmetic_id)
    }

    /// Restores the profile invariants on a possibly sparse representation.
    ///
    /// Storage backends call this on every read and write path: empty or
    /// duplicate unlock entries are dropped, the default cosmetic is added
    /// in front when missing, and an empty or not-unlocked selection falls
    /// back to the default.
    pub fn normalized(mut self) -> Self {
        let mut seen = HashSet::new();
        self.unlocked_cosmetics
            .retain(|c| !c.is_empty() && seen.insert(c.clone()));

        if !seen.contains(DEFAULT_COSMETIC) {
            self.unlocked_cosmetics
                .insert(0, DEFAULT_COSMETIC.to_string());
        }

        let selection_valid =
            !self.selected_cosmetic.is_empty() && self.has_unlocked(&self.selected_cosmetic);
        if !selection_valid {
            self.selected_cosmetic = DEFAULT_COSMETIC.to_string();
        }

        self.schema_version = SCHEMA_VERSION;
        self
    }
}
