//! Profile lookup and lazy creation.

use std::sync::Arc;

use crate::domain::entities::Profile;
use crate::domain::repositories::ProfileRepository;
use crate::error::AppError;
use crate::utils::identifiers::validate_device_id;
use serde_json::json;

/// Service for reading profiles, creating them on first sight.
pub struct ProfileService<R: ProfileRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: ProfileRepository + ?Sized> ProfileService<R> {
    /// Creates a new profile service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the existing profile or creates one with defaults.
    ///
    /// A fresh profile has zero clicks and only the default cosmetic,
    /// unlocked and selected. If a concurrent request creates the same
    /// profile first, the stored one is returned: the first write wins and
    /// `created_at` never changes after that.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank or oversized id and
    /// [`AppError::StorageUnavailable`] on backend failures.
    pub async fn get_or_create_profile(&self, device_id: &str) -> Result<Profile, AppError> {
        validate_device_id(device_id)?;

        if let Some(profile) = self.repository.get_by_id(device_id).await? {
            return Ok(profile);
        }

        match self.repository.create(Profile::new(device_id)).await {
            Ok(profile) => {
                metrics::counter!("button0_profiles_created_total").increment(1);
                tracing::info!(device_id, "profile created");
                Ok(profile)
            }
            Err(AppError::Conflict { .. }) => {
                tracing::debug!(device_id, "profile created concurrently, re-reading");
                self.get_profile(device_id).await
            }
            Err(e) => Err(e),
        }
    }

    /// Returns an existing profile without creating one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no profile exists for `device_id`.
    pub async fn get_profile(&self, device_id: &str) -> Result<Profile, AppError> {
        self.repository
            .get_by_id(device_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Profile not found", json!({ "device_id": device_id }))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockProfileRepository;
    use chrono::{Duration, Utc};

    fn create_test_profile(device_id: &str) -> Profile {
        let mut profile = Profile::new(device_id);
        profile.created_at = Utc::now() - Duration::hours(1);
        profile.my_clicks = 7;
        profile
    }

    #[tokio::test]
    async fn test_get_or_create_returns_existing_profile() {
        let mut mock_repo = MockProfileRepository::new();

        let existing = create_test_profile("device-1");
        let expected_created_at = existing.created_at;
        mock_repo
            .expect_get_by_id()
            .withf(|id| id == "device-1")
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        mock_repo.expect_create().times(0);

        let service = ProfileService::new(Arc::new(mock_repo));

        let profile = service.get_or_create_profile("device-1").await.unwrap();
        assert_eq!(profile.my_clicks, 7);
        assert_eq!(profile.created_at, expected_created_at);
    }

    #[tokio::test]
    async fn test_get_or_create_creates_with_defaults() {
        let mut mock_repo = MockProfileRepository::new();

        mock_repo.expect_get_by_id().times(1).returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|p| {
                p.device_id == "device-1"
                    && p.my_clicks == 0
                    && p.unlocked_cosmetics == vec!["default".to_string()]
                    && p.selected_cosmetic == "default"
            })
            .times(1)
            .returning(Ok);

        let service = ProfileService::new(Arc::new(mock_repo));

        let profile = service.get_or_create_profile("device-1").await.unwrap();
        assert_eq!(profile.device_id, "device-1");
        assert_eq!(profile.schema_version, 1);
    }

    #[tokio::test]
    async fn test_get_or_create_resolves_creation_race() {
        let mut mock_repo = MockProfileRepository::new();

        let winner = create_test_profile("device-1");
        let mut lookups = 0;
        mock_repo.expect_get_by_id().times(2).returning(move |_| {
            lookups += 1;
            if lookups == 1 {
                Ok(None)
            } else {
                Ok(Some(winner.clone()))
            }
        });
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::conflict("Profile already exists", json!({}))));

        let service = ProfileService::new(Arc::new(mock_repo));

        let profile = service.get_or_create_profile("device-1").await.unwrap();
        assert_eq!(profile.my_clicks, 7);
    }

    #[tokio::test]
    async fn test_get_or_create_rejects_blank_id() {
        let mock_repo = MockProfileRepository::new();
        let service = ProfileService::new(Arc::new(mock_repo));

        let result = service.get_or_create_profile("   ").await;
        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_or_create_propagates_storage_errors() {
        let mut mock_repo = MockProfileRepository::new();

        mock_repo.expect_get_by_id().times(1).returning(|_| {
            Err(AppError::storage_unavailable(
                "Storage backend unavailable",
                json!({}),
            ))
        });

        let service = ProfileService::new(Arc::new(mock_repo));

        let result = service.get_or_create_profile("device-1").await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::StorageUnavailable { .. }
        ));
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut mock_repo = MockProfileRepository::new();
        mock_repo.expect_get_by_id().times(1).returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(mock_repo));

        let result = service.get_profile("missing").await;
        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
