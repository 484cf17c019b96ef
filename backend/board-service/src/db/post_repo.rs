use crate::models::Post;
use sqlx::PgPool;

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, user_id, industry_id, like_count, created_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// List posts, newest first, optionally filtered by industry
pub async fn list_posts(
    pool: &PgPool,
    industry_id: Option<i64>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Post>, sqlx::Error> {
    let posts = if let Some(industry_id) = industry_id {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, user_id, industry_id, like_count, created_at
            FROM posts
            WHERE industry_id = $1
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(industry_id)
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Post>(
            r#"
            SELECT id, title, content, user_id, industry_id, like_count, created_at
            FROM posts
            ORDER BY created_at DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?
    };

    Ok(posts)
}

/// Check whether a post exists
pub async fn post_exists(pool: &PgPool, post_id: i64) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(SELECT 1 FROM posts WHERE id = $1)
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}
