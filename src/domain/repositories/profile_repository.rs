//! Repository trait for per-device profiles.

use crate::domain::entities::Profile;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of [`ProfileRepository::unlock`].
#[derive(Debug, Clone)]
pub struct UnlockOutcome {
    pub profile: Profile,
    /// False if the cosmetic was already unlocked. Nothing was written.
    pub newly_unlocked: bool,
}

/// Storage capability for [`Profile`] records keyed by `device_id`.
///
/// Every returned profile is normalized: the default cosmetic is present and
/// the selection is a member of the unlocked set, even when the backing
/// store holds a sparse representation.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryProfileRepository`]
/// - [`crate::infrastructure::persistence::PgProfileRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Looks up a profile. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend failures.
    async fn get_by_id(&self, device_id: &str) -> Result<Option<Profile>, AppError>;

    /// Inserts a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if a profile with the same `device_id`
    /// already exists. Existing rows are never overwritten.
    async fn create(&self, profile: Profile) -> Result<Profile, AppError>;

    /// Persists the cosmetic fields of an existing profile.
    ///
    /// Adds any cosmetics in `profile.unlocked_cosmetics` that are not stored
    /// yet and writes `selected_cosmetic`. Unlocks are never removed.
    /// `my_clicks` is only changed by [`Self::increment_clicks`], so a
    /// cosmetic edit cannot roll back a concurrent click.
    ///
    /// `updated_at` is set from the store's clock; the incoming value is
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the profile does not exist.
    async fn update(&self, profile: Profile) -> Result<Profile, AppError>;

    /// Adds one cosmetic to an existing profile.
    ///
    /// Membership is checked under the same lock as the write, so racing
    /// unlocks of one cosmetic produce a single write. An already unlocked
    /// cosmetic leaves the stored profile untouched, `updated_at` included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the profile does not exist.
    async fn unlock(
        &self,
        device_id: &str,
        cosmetic_id: &str,
    ) -> Result<UnlockOutcome, AppError>;

    /// Atomically adds `amount` to `my_clicks`, creating the profile with
    /// defaults first if it is missing. Returns the post-increment profile.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StorageUnavailable`] on backend failures.
    async fn increment_clicks(&self, device_id: &str, amount: i64) -> Result<Profile, AppError>;
}
