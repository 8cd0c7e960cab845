use button0_api::AppError;
use button0_api::domain::entities::Profile;
use button0_api::domain::repositories::ProfileRepository;
use button0_api::infrastructure::persistence::PgProfileRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_and_get_profile(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    let created = repo.create(Profile::new("device-1")).await.unwrap();
    let fetched = repo.get_by_id("device-1").await.unwrap().unwrap();

    assert_eq!(fetched.device_id, "device-1");
    assert_eq!(fetched.my_clicks, 0);
    assert_eq!(fetched.unlocked_cosmetics, vec!["default"]);
    assert_eq!(fetched.selected_cosmetic, "default");
    assert_eq!(fetched.created_at, created.created_at);
}

#[sqlx::test]
async fn test_get_missing_profile(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    assert!(repo.get_by_id("nobody").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_create_duplicate_conflicts(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    repo.create(Profile::new("device-1")).await.unwrap();
    let result = repo.create(Profile::new("device-1")).await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
}

#[sqlx::test]
async fn test_sparse_row_is_normalized(pool: PgPool) {
    sqlx::query("INSERT INTO profiles (device_id, selected_cosmetic) VALUES ($1, $2)")
        .bind("legacy-device")
        .bind("")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgProfileRepository::new(Arc::new(pool));
    let profile = repo.get_by_id("legacy-device").await.unwrap().unwrap();

    assert_eq!(profile.unlocked_cosmetics, vec!["default"]);
    assert_eq!(profile.selected_cosmetic, "default");
}

#[sqlx::test]
async fn test_update_adds_unlocks_and_selects(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));
    let mut profile = repo.create(Profile::new("device-1")).await.unwrap();

    profile.unlocked_cosmetics.push("neon".to_string());
    profile.selected_cosmetic = "neon".to_string();

    let updated = repo.update(profile).await.unwrap();

    assert_eq!(updated.unlocked_cosmetics, vec!["default", "neon"]);
    assert_eq!(updated.selected_cosmetic, "neon");
}

#[sqlx::test]
async fn test_update_timestamp_comes_from_database(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));
    let mut profile = repo.create(Profile::new("device-1")).await.unwrap();
    let created_at = profile.created_at;

    profile.updated_at = created_at - chrono::Duration::days(1);
    let updated = repo.update(profile).await.unwrap();

    assert!(updated.updated_at >= created_at);
}

#[sqlx::test]
async fn test_unlock_twice_writes_once(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));
    repo.create(Profile::new("device-1")).await.unwrap();

    let first = repo.unlock("device-1", "neon").await.unwrap();
    let second = repo.unlock("device-1", "neon").await.unwrap();

    assert!(first.newly_unlocked);
    assert!(!second.newly_unlocked);
    assert_eq!(second.profile.updated_at, first.profile.updated_at);
    assert_eq!(second.profile.unlocked_cosmetics, vec!["default", "neon"]);
}

#[sqlx::test]
async fn test_concurrent_unlocks_write_once(pool: PgPool) {
    let repo = Arc::new(PgProfileRepository::new(Arc::new(pool)));
    repo.create(Profile::new("device-1")).await.unwrap();

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.unlock("device-1", "neon").await })
        })
        .collect();

    let mut writes = 0;
    for handle in handles {
        if handle.await.unwrap().unwrap().newly_unlocked {
            writes += 1;
        }
    }

    assert_eq!(writes, 1);
    let profile = repo.get_by_id("device-1").await.unwrap().unwrap();
    assert_eq!(profile.unlocked_cosmetics, vec!["default", "neon"]);
}

#[sqlx::test]
async fn test_unlock_missing_profile(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    let result = repo.unlock("nobody", "neon").await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_update_never_rolls_back_clicks(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));
    let stale = repo.create(Profile::new("device-1")).await.unwrap();

    repo.increment_clicks("device-1", 5).await.unwrap();

    let updated = repo.update(stale).await.unwrap();
    assert_eq!(updated.my_clicks, 5);
}

#[sqlx::test]
async fn test_update_missing_profile(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    let result = repo.update(Profile::new("nobody")).await;

    assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
}

#[sqlx::test]
async fn test_increment_creates_and_accumulates(pool: PgPool) {
    let repo = PgProfileRepository::new(Arc::new(pool));

    let first = repo.increment_clicks("device-1", 3).await.unwrap();
    let second = repo.increment_clicks("device-1", 2).await.unwrap();

    assert_eq!(first.my_clicks, 3);
    assert_eq!(second.my_clicks, 5);
    assert_eq!(second.unlocked_cosmetics, vec!["default"]);
}

#[sqlx::test]
async fn test_concurrent_increments_same_device(pool: PgPool) {
    let repo = Arc::new(PgProfileRepository::new(Arc::new(pool)));

    let handles: Vec<_> = (0..25)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.increment_clicks("device-1", 1).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let profile = repo.get_by_id("device-1").await.unwrap().unwrap();
    assert_eq!(profile.my_clicks, 25);
}
