//! Cosmetic unlock and selection service.

use std::sync::Arc;

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;
use crate::utils::identifiers::{validate_cosmetic_id, validate_device_id};
use serde_json::json;

/// Service for unlocking and selecting cosmetics on existing profiles.
///
/// Neither operation creates a profile; a device must have been seen
/// through [`crate::application::services::ProfileService`] or a click first.
pub struct CosmeticService<R: ProfileRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProfileRepository + ?Sized> CosmeticService<R> {
    /// Creates a new cosmetic service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Adds `cosmetic_id` to the profile's unlocked set.
    ///
    /// Idempotent: unlocking an already unlocked cosmetic returns the profile
    /// unchanged, without a write and without bumping `updated_at`. The check
    /// and the write happen in one storage step.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the profile does not exist.
    /// Returns [`AppError::Validation`] if an id is malformed.
    pub async fn unlock_cosmetic(
        &self,
        device_id: &str,
        cosmetic_id: &str,
    ) -> Result<Profile, AppError> {
        validate_device_id(device_id)?;
        validate_cosmetic_id(cosmetic_id)?;

        let outcome = self.repository.unlock(device_id, cosmetic_id).await?;

        if outcome.newly_unlocked {
            metrics::counter!("button0_cosmetic_unlocks_total").increment(1);
            tracing::info!(device_id, cosmetic_id, "cosmetic unlocked");
        } else {
            tracing::debug!(device_id, cosmetic_id, "cosmetic already unlocked");
        }

        Ok(outcome.profile)
    }

    /// Makes `cosmetic_id` the profile's active cosmetic.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the profile does not exist.
    /// Returns [`AppError::Validation`] if the cosmetic is not unlocked.
    pub async fn select_cosmetic(
        &self,
        device_id: &str,
        cosmetic_id: &str,
    ) -> Result<Profile, AppError> {
        validate_device_id(device_id)?;
        validate_cosmetic_id(cosmetic_id)?;

        let mut profile = self.load(device_id).await?;

        if !profile.has_unlocked(cosmetic_id) {
            return Err(AppError::bad_request(
                format!("Cosmetic '{cosmetic_id}' is not unlocked"),
                json!({ "device_id": device_id, "cosmetic_id": cosmetic_id }),
            ));
        }

        profile.selected_cosmetic = cosmetic_id.to_string();

        let profile = self.repository.update(profile).await?;
        tracing::info!(device_id, cosmetic_id, "cosmetic selected");

        Ok(profile)
    }

    async fn load(&self, device_id: &str) -> Result<Profile, AppError> {
        self.repository
            .get_by_id(device_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Profile not found", json!({ "device_id": device_id }))
            })
    }
}
