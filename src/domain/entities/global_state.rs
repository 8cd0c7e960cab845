//! Global click counter entity.

use chrono::{DateTime, Utc};

use super::SCHEMA_VERSION;

/// Aggregate click count across all devices.
///
/// Conceptually a single row (id = 1). Only ever incremented.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalState {
    pub global_clicks: i64,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl GlobalState {
    pub fn new(global_clicks: i64, updated_at: DateTime<Utc>) -> Self {
        Self {
            global_clicks,
            updated_at,
            schema_version: SCHEMA_VERSION,
        }
    }
}

impl Default for GlobalState {
    fn default() -> Self {
        Self::new(0, Utc::now())
    }
}
