/// Post service - handles post save (with tags), retrieval, and cascade
/// deletion
use crate::db::{comment_repo, post_repo, tag_repo};
use crate::error::{AppError, Result};
use crate::models::Post;
use crate::services::{ensure_positive_id, tags};
use serde::Serialize;
use sqlx::PgPool;

/// Input for a post save
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub industry_id: Option<i64>,
    pub tags: Vec<String>,
}

/// A post with the read-side extras the board screen shows
#[derive(Debug, Serialize)]
pub struct PostDetail {
    #[serde(flatten)]
    pub post: Post,
    pub tags: Vec<String>,
    pub comment_count: i64,
}

pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Save a new post together with its tags
    ///
    /// The insert and the tag resolution/linking share one transaction: a
    /// post never becomes visible with half its tags attached.
    pub async fn create_post(&self, new_post: NewPost) -> Result<Post> {
        ensure_positive_id("user_id", new_post.user_id)?;
        if new_post.title.trim().is_empty() {
            return Err(AppError::Validation("title must not be empty".to_string()));
        }
        if new_post.content.trim().is_empty() {
            return Err(AppError::Validation("content must not be empty".to_string()));
        }
        let tag_names = tags::normalize_names(&new_post.tags)?;

        let mut tx = self.pool.begin().await?;

        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (title, content, user_id, industry_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, content, user_id, industry_id, like_count, created_at
            "#,
        )
        .bind(new_post.title.trim())
        .bind(new_post.content.trim())
        .bind(new_post.user_id)
        .bind(new_post.industry_id)
        .fetch_one(&mut *tx)
        .await?;

        let linked = tags::resolve_and_link(&mut tx, post.id, &tag_names).await?;

        tx.commit().await?;

        tracing::info!(post_id = post.id, user_id = post.user_id, linked, "post created");

        Ok(post)
    }

    /// Get a post with its tags and comment count
    pub async fn get_post(&self, post_id: i64) -> Result<Option<PostDetail>> {
        ensure_positive_id("post_id", post_id)?;

        let post = match post_repo::find_post_by_id(&self.pool, post_id).await? {
            Some(post) => post,
            None => return Ok(None),
        };

        let tags = tag_repo::get_tag_names_for_post(&self.pool, post_id).await?;
        let comment_count = comment_repo::count_comments_by_post(&self.pool, post_id).await?;

        Ok(Some(PostDetail {
            post,
            tags,
            comment_count,
        }))
    }

    /// List posts, newest first
    pub async fn list_posts(
        &self,
        industry_id: Option<i64>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Post>> {
        let posts = post_repo::list_posts(&self.pool, industry_id, limit, offset).await?;
        Ok(posts)
    }

    /// Remove a post and everything that hangs off it
    ///
    /// One transaction, children first: reports, comments, tag links, likes,
    /// then the post row. Tag rows themselves persist. Returns `false` when
    /// the post did not exist - deleting twice is a no-op, not an error.
    pub async fn delete_post(&self, post_id: i64) -> Result<bool> {
        ensure_positive_id("post_id", post_id)?;

        let mut tx = self.pool.begin().await?;

        let reports = sqlx::query("DELETE FROM reports WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let comments = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let tag_links = sqlx::query("DELETE FROM post_tags WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let likes = sqlx::query("DELETE FROM likes WHERE post_id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let deleted = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        tx.commit().await?;

        if deleted {
            tracing::info!(
                post_id,
                reports,
                comments,
                tag_links,
                likes,
                "post deleted with dependents"
            );
        }

        Ok(deleted)
    }
}
