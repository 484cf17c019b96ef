/// Comment service - comment creation and listing
use crate::db::{comment_repo, post_repo};
use crate::error::{AppError, Result};
use crate::models::Comment;
use crate::services::ensure_positive_id;
use sqlx::PgPool;

pub struct CommentService {
    pool: PgPool,
}

impl CommentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new comment
    pub async fn create_comment(
        &self,
        post_id: i64,
        user_id: i64,
        content: &str,
    ) -> Result<Comment> {
        ensure_positive_id("post_id", post_id)?;
        ensure_positive_id("user_id", user_id)?;
        let content = content.trim();
        if content.is_empty() {
            return Err(AppError::Validation("content must not be empty".to_string()));
        }

        if !post_repo::post_exists(&self.pool, post_id).await? {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        let comment = comment_repo::create_comment(&self.pool, post_id, user_id, content).await?;

        Ok(comment)
    }

    /// Get comments for a post, oldest first
    pub async fn get_post_comments(
        &self,
        post_id: i64,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Comment>> {
        ensure_positive_id("post_id", post_id)?;

        let comments =
            comment_repo::get_comments_by_post(&self.pool, post_id, limit, offset).await?;

        Ok(comments)
    }
}
