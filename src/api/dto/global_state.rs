//! DTO for the global counter endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::GlobalState;

#[derive(Debug, Serialize)]
pub struct GlobalStateResponse {
    pub global_clicks: i64,
    pub updated_at: DateTime<Utc>,
    pub schema_version: i32,
}

impl From<GlobalState> for GlobalStateResponse {
    fn from(state: GlobalState) -> Self {
        Self {
            global_clicks: state.global_clicks,
            updated_at: state.updated_at,
            schema_version: state.schema_version,
        }
    }
}
