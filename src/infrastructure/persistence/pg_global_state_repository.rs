//! PostgreSQL implementation of the global counter.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use std::sync::Arc;

use crate::domain::entities::GlobalState;
use crate::domain::repositories::GlobalStateRepository;
use crate::error::AppError;

/// Fixed primary key of the singleton counter row.
pub const GLOBAL_STATE_ID: i32 = 1;

#[derive(Debug, sqlx::FromRow)]
struct GlobalStateRow {
    global_clicks: i64,
    updated_at: DateTime<Utc>,
}

impl From<GlobalStateRow> for GlobalState {
    fn from(row: GlobalStateRow) -> Self {
        GlobalState::new(row.global_clicks, row.updated_at)
    }
}

/// PostgreSQL repository for the global click counter.
pub struct PgGlobalStateRepository {
    pool: Arc<PgPool>,
}

impl PgGlobalStateRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Adds `delta` to the singleton row on `conn`, creating it if missing.
    pub(crate) async fn increment_clicks_on(
        conn: &mut PgConnection,
        delta: i64,
    ) -> Result<GlobalState, sqlx::Error> {
        let row = sqlx::query_as::<_, GlobalStateRow>(
            r#"
            INSERT INTO global_state (id, global_clicks, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (id) DO UPDATE
                SET global_clicks = global_state.global_clicks + EXCLUDED.global_clicks,
                    updated_at    = EXCLUDED.updated_at
            RETURNING global_clicks, updated_at
            "#,
        )
        .bind(GLOBAL_STATE_ID)
        .bind(delta)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }
}

#[async_trait]
impl GlobalStateRepository for PgGlobalStateRepository {
    async fn get_state(&self) -> Result<GlobalState, AppError> {
        let mut conn = self.pool.acquire().await?;

        sqlx::query(
            r#"
            INSERT INTO global_state (id, global_clicks)
            VALUES ($1, 0)
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(GLOBAL_STATE_ID)
        .execute(&mut *conn)
        .await?;

        let row = sqlx::query_as::<_, GlobalStateRow>(
            "SELECT global_clicks, updated_at FROM global_state WHERE id = $1",
        )
        .bind(GLOBAL_STATE_ID)
        .fetch_one(&mut *conn)
        .await?;

        Ok(row.into())
    }

    async fn increment_clicks(&self, delta: i64) -> Result<GlobalState, AppError> {
        let mut conn = self.pool.acquire().await?;
        Ok(Self::increment_clicks_on(&mut conn, delta).await?)
    }
}
