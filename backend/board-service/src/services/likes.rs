/// Like service - flips a user's like state while keeping the denormalized
/// counter on the post in step with the like rows
use crate::error::{AppError, Result};
use crate::services::ensure_positive_id;
use sqlx::PgPool;

pub struct LikeService {
    pool: PgPool,
}

impl LikeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Toggle a user's like on a post
    ///
    /// Returns the new state: `true` if the call liked the post, `false` if
    /// it removed an existing like. The post row is locked for the duration
    /// of the transaction, so concurrent toggles on the same post serialize
    /// and the counter can only move together with the like row. The counter
    /// itself is mutated with relative updates in SQL, never read back and
    /// rewritten in application code.
    pub async fn toggle(&self, user_id: i64, post_id: i64) -> Result<bool> {
        ensure_positive_id("user_id", user_id)?;
        ensure_positive_id("post_id", post_id)?;

        let mut tx = self.pool.begin().await?;

        // Lock the post row; also the existence check. Dropping the
        // transaction on the error path rolls everything back.
        let locked: Option<(i64,)> = sqlx::query_as("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(post_id)
            .fetch_optional(&mut *tx)
            .await?;

        if locked.is_none() {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        let removed = sqlx::query(
            r#"
            DELETE FROM likes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        let liked = if removed > 0 {
            sqlx::query(
                r#"
                UPDATE posts
                SET like_count = GREATEST(like_count - 1, 0)
                WHERE id = $1
                "#,
            )
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

            false
        } else {
            // The unique (user_id, post_id) key is the backstop if another
            // writer slipped in despite the post lock.
            sqlx::query(
                r#"
                INSERT INTO likes (user_id, post_id)
                VALUES ($1, $2)
                ON CONFLICT (user_id, post_id) DO NOTHING
                "#,
            )
            .bind(user_id)
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                UPDATE posts
                SET like_count = like_count + 1
                WHERE id = $1
                "#,
            )
            .bind(post_id)
            .execute(&mut *tx)
            .await?;

            true
        };

        tx.commit().await?;

        tracing::debug!(user_id, post_id, liked, "like toggled");

        Ok(liked)
    }
}
