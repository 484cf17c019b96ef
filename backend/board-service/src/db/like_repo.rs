use sqlx::PgPool;

/// Check if a user has liked a post
pub async fn has_liked(pool: &PgPool, user_id: i64, post_id: i64) -> Result<bool, sqlx::Error> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM likes
            WHERE user_id = $1 AND post_id = $2
        )
        "#,
    )
    .bind(user_id)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(exists)
}

/// Count like rows for a post
///
/// The authoritative count; `posts.like_count` is the denormalized copy kept
/// in step by the toggle transaction.
pub async fn count_likes_by_post(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar(
        r#"
        SELECT COUNT(*) FROM likes
        WHERE post_id = $1
        "#,
    )
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(count)
}
