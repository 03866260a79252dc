//! Repository for the `videos` table.

use chrono::Utc;
use vidbits_core::types::DbId;

use crate::models::video::{CreateVideo, UpdateVideo, Video};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, url, description, created_at, updated_at";

/// Provides CRUD operations for videos.
pub struct VideoRepo;

impl VideoRepo {
    /// Insert a new video, returning the created row with its generated id.
    pub async fn create(pool: &DbPool, input: &CreateVideo) -> Result<Video, sqlx::Error> {
        let now = Utc::now();
        let query = format!(
            "INSERT INTO videos (title, url, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a video by its id.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos WHERE id = $1");
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all videos in insertion order.
    pub async fn list(pool: &DbPool) -> Result<Vec<Video>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM videos ORDER BY id");
        sqlx::query_as::<_, Video>(&query).fetch_all(pool).await
    }

    /// Number of stored videos.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM videos")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Overwrite title, url and description of an existing video.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateVideo,
    ) -> Result<Option<Video>, sqlx::Error> {
        let query = format!(
            "UPDATE videos SET \
                title = $2, \
                url = $3, \
                description = $4, \
                updated_at = $5 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Video>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.url)
            .bind(&input.description)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a video. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
