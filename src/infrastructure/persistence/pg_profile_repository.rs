//! PostgreSQL implementation of profile repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::{DEFAULT_COSMETIC, Profile, SCHEMA_VERSION};
use crate::domain::repositories::{ProfileRepository, UnlockOutcome};
use crate::error::AppError;

/// Row shape of the `profiles` table.
#[derive(Debug, sqlx::FromRow)]
struct ProfileRow {
    device_id: String,
    my_clicks: i64,
    selected_cosmetic: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self, unlocked_cosmetics: Vec<String>) -> Profile {
        Profile {
            device_id: self.device_id,
            my_clicks: self.my_clicks,
            unlocked_cosmetics,
            selected_cosmetic: self.selected_cosmetic,
            created_at: self.created_at,
            updated_at: self.updated_at,
            schema_version: SCHEMA_VERSION,
        }
        .normalized()
    }
}

/// PostgreSQL repository for profiles.
///
/// Profiles live in `profiles`; unlocks live in `unlocked_cosmetics` with a
/// `(device_id, cosmetic_id)` uniqueness constraint. The default cosmetic is
/// implicit and never stored as a row. Timestamps always come from the
/// database clock.
pub struct PgProfileRepository {
    pool: Arc<PgPool>,
}

impl PgProfileRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Upserts the profile row and adds `amount` to its counter on `conn`.
    ///
    /// Runs as one statement, so concurrent callers for the same device
    /// serialize on the row lock instead of losing updates. Used directly by
    /// [`crate::infrastructure::persistence::PgClickLedger`] inside its
    /// transaction.
    pub(crate) async fn increment_clicks_on(
        conn: &mut PgConnection,
        device_id: &str,
        amount: i64,
    ) -> Result<Profile, sqlx::Error> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (device_id, my_clicks)
            VALUES ($1, $2)
            ON CONFLICT (device_id) DO UPDATE
                SET my_clicks  = profiles.my_clicks + EXCLUDED.my_clicks,
                    updated_at = NOW()
            RETURNING device_id, my_clicks, selected_cosmetic, created_at, updated_at
            "#,
        )
        .bind(device_id)
        .bind(amount)
        .fetch_one(&mut *conn)
        .await?;

        let unlocked = fetch_unlocked(conn, device_id).await?;
        Ok(row.into_profile(unlocked))
    }
}

/// Locks the profile row for the rest of the transaction.
async fn lock_profile(conn: &mut PgConnection, device_id: &str) -> Result<ProfileRow, AppError> {
    sqlx::query_as::<_, ProfileRow>(
        r#"
        SELECT device_id, my_clicks, selected_cosmetic, created_at, updated_at
        FROM profiles
        WHERE device_id = $1
        FOR UPDATE
        "#,
    )
    .bind(device_id)
    .fetch_optional(&mut *conn)
    .await?
    .ok_or_else(|| AppError::not_found("Profile not found", json!({ "device_id": device_id })))
}

/// Loads unlocked cosmetics in unlock order.
async fn fetch_unlocked(conn: &mut PgConnection, device_id: &str) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        r#"
        SELECT cosmetic_id
        FROM unlocked_cosmetics
        WHERE device_id = $1
        ORDER BY id
        "#,
    )
    .bind(device_id)
    .fetch_all(&mut *conn)
    .await
}

/// Inserts unlock rows, skipping the implicit default and existing rows.
async fn insert_unlocks(
    conn: &mut PgConnection,
    device_id: &str,
    cosmetics: &[String],
) -> Result<(), sqlx::Error> {
    let cosmetics: Vec<String> = cosmetics
        .iter()
        .filter(|c| c.as_str() != DEFAULT_COSMETIC)
        .cloned()
        .collect();

    if cosmetics.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO unlocked_cosmetics (device_id, cosmetic_id)
        SELECT $1, t.cosmetic_id
        FROM UNNEST($2::TEXT[]) WITH ORDINALITY AS t(cosmetic_id, ord)
        ORDER BY t.ord
        ON CONFLICT ON CONSTRAINT uq_device_cosmetic DO NOTHING
        "#,
    )
    .bind(device_id)
    .bind(&cosmetics)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    async fn get_by_id(&self, device_id: &str) -> Result<Option<Profile>, AppError> {
        let mut conn = self.pool.acquire().await?;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT device_id, my_clicks, selected_cosmetic, created_at, updated_at
            FROM profiles
            WHERE device_id = $1
            "#,
        )
        .bind(device_id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let unlocked = fetch_unlocked(&mut conn, device_id).await?;
        Ok(Some(row.into_profile(unlocked)))
    }

    async fn create(&self, profile: Profile) -> Result<Profile, AppError> {
        let profile = profile.normalized();
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            INSERT INTO profiles (device_id, my_clicks, selected_cosmetic, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (device_id) DO NOTHING
            RETURNING device_id, my_clicks, selected_cosmetic, created_at, updated_at
            "#,
        )
        .bind(&profile.device_id)
        .bind(profile.my_clicks)
        .bind(&profile.selected_cosmetic)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Err(AppError::conflict(
                "Profile already exists",
                json!({ "device_id": profile.device_id }),
            ));
        };

        insert_unlocks(&mut tx, &profile.device_id, &profile.unlocked_cosmetics).await?;
        let unlocked = fetch_unlocked(&mut tx, &profile.device_id).await?;
        tx.commit().await?;

        Ok(row.into_profile(unlocked))
    }

    async fn update(&self, profile: Profile) -> Result<Profile, AppError> {
        let mut tx = self.pool.begin().await?;
        lock_profile(&mut tx, &profile.device_id).await?;

        // Unlocks first so the selection always references a stored row.
        insert_unlocks(&mut tx, &profile.device_id, &profile.unlocked_cosmetics).await?;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles SET
                selected_cosmetic = $2,
                updated_at        = NOW()
            WHERE device_id = $1
            RETURNING device_id, my_clicks, selected_cosmetic, created_at, updated_at
            "#,
        )
        .bind(&profile.device_id)
        .bind(&profile.selected_cosmetic)
        .fetch_one(&mut *tx)
        .await?;

        let unlocked = fetch_unlocked(&mut tx, &profile.device_id).await?;
        tx.commit().await?;

        Ok(row.into_profile(unlocked))
    }

    async fn unlock(
        &self,
        device_id: &str,
        cosmetic_id: &str,
    ) -> Result<UnlockOutcome, AppError> {
        let mut tx = self.pool.begin().await?;
        let row = lock_profile(&mut tx, device_id).await?;

        let unlocked = fetch_unlocked(&mut tx, device_id).await?;
        let stored = row.into_profile(unlocked);

        if stored.has_unlocked(cosmetic_id) {
            tx.commit().await?;
            return Ok(UnlockOutcome {
                profile: stored,
                newly_unlocked: false,
            });
        }

        insert_unlocks(&mut tx, device_id, &[cosmetic_id.to_string()]).await?;

        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            UPDATE profiles SET updated_at = NOW()
            WHERE device_id = $1
            RETURNING device_id, my_clicks, selected_cosmetic, created_at, updated_at
            "#,
        )
        .bind(device_id)
        .fetch_one(&mut *tx)
        .await?;

        let unlocked = fetch_unlocked(&mut tx, device_id).await?;
        tx.commit().await?;

        Ok(UnlockOutcome {
            profile: row.into_profile(unlocked),
            newly_unlocked: true,
        })
    }

    async fn increment_clicks(&self, device_id: &str, amount: i64) -> Result<Profile, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(Self::increment_clicks_on(&mut conn, device_id, amount).await?)
    }
}
