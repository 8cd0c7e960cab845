//! In-memory implementation of the profile repository.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::entities::Profile;
use crate::domain::repositories::{ProfileRepository, UnlockOutcome};
use crate::error::AppError;

/// Process-local profile storage guarded by one mutex.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: Mutex<HashMap<String, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub fn len(&self) -> usize {
        self.profiles.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.lock().is_empty()
    }

    /// Synchronous increment, callable while another store lock is held.
    pub(super) fn add_clicks(&self, device_id: &str, amount: i64) -> Profile {
        let mut profiles = self.profiles.lock();

        let profile = profiles
            .entry(device_id.to_string())
            .or_insert_with(|| Profile::new(device_id));

        profile.my_clicks += amount;
        profile.updated_at = Utc::now();

        profile.clone()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn get_by_id(&self, device_id: &str) -> Result<Option<Profile>, AppError> {
        Ok(self.profiles.lock().get(device_id).cloned())
    }

    async fn create(&self, profile: Profile) -> Result<Profile, AppError> {
        let profile = profile.normalized();
        let mut profiles = self.profiles.lock();

        match profiles.entry(profile.device_id.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(
                "Profile already exists",
                json!({ "device_id": profile.device_id }),
            )),
            Entry::Vacant(slot) => Ok(slot.insert(profile).clone()),
        }
    }

    async fn update(&self, profile: Profile) -> Result<Profile, AppError> {
        let mut profiles = self.profiles.lock();

        let Some(stored) = profiles.get_mut(&profile.device_id) else {
            return Err(AppError::not_found(
                "Profile not found",
                json!({ "device_id": profile.device_id }),
            ));
        };

        for cosmetic in profile.unlocked_cosmetics {
            if !stored.has_unlocked(&cosmetic) {
                stored.unlocked_cosmetics.push(cosmetic);
            }
        }
        stored.selected_cosmetic = profile.selected_cosmetic;
        stored.updated_at = Utc::now();

        *stored = stored.clone().normalized();
        Ok(stored.clone())
    }

    async fn unlock(
        &self,
        device_id: &str,
        cosmetic_id: &str,
    ) -> Result<UnlockOutcome, AppError> {
        let mut profiles = self.profiles.lock();

        let Some(stored) = profiles.get_mut(device_id) else {
            return Err(AppError::not_found(
                "Profile not found",
                json!({ "device_id": device_id }),
            ));
        };

        let newly_unlocked = !stored.has_unlocked(cosmetic_id);
        if newly_unlocked {
            stored.unlocked_cosmetics.push(cosmetic_id.to_string());
            stored.updated_at = Utc::now();
        }

        Ok(UnlockOutcome {
            profile: stored.clone(),
            newly_unlocked,
        })
    }

    async fn increment_clicks(&self, device_id: &str, amount: i64) -> Result<Profile, AppError> {
        Ok(self.add_clicks(device_id, amount))
    }
}
