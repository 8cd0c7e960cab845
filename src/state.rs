//! Shared application state for Axum handlers.

use std::sync::Arc;

use crate::application::services::{ClickService, CosmeticService, ProfileService};
use crate::config::StorageMode;
use crate::domain::repositories::{ClickLedger, GlobalStateRepository, ProfileRepository};
use crate::infrastructure::storage::Repositories;

pub type SharedProfileService = ProfileService<dyn ProfileRepository>;
pub type SharedClickService = ClickService<dyn ClickLedger, dyn GlobalStateRepository>;
pub type SharedCosmeticService = CosmeticService<dyn ProfileRepository>;

/// Services constructed once at startup and cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<SharedProfileService>,
    pub click_service: Arc<SharedClickService>,
    pub cosmetic_service: Arc<SharedCosmeticService>,
    pub storage_mode: StorageMode,
}

impl AppState {
    /// Wires the services over one repository bundle.
    pub fn new(repositories: Repositories) -> Self {
        let Repositories {
            mode,
            profiles,
            global_state,
            clicks,
        } = repositories;

        Self {
            profile_service: Arc::new(ProfileService::new(profiles.clone())),
            click_service: Arc::new(ClickService::new(clicks, global_state)),
            cosmetic_service: Arc::new(CosmeticService::new(profiles)),
            storage_mode: mode,
        }
    }
}
