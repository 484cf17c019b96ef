use crate::models::Tag;
use sqlx::PgPool;

/// Get the tag names linked to a post
pub async fn get_tag_names_for_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<String>, sqlx::Error> {
    let names: Vec<String> = sqlx::query_scalar(
        r#"
        SELECT t.name
        FROM post_tags pt
        JOIN tags t ON pt.tag_id = t.tag_id
        WHERE pt.post_id = $1
        ORDER BY t.name
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(names)
}

/// List known tags, alphabetically
pub async fn list_tags(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<Tag>, sqlx::Error> {
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT tag_id AS id, name
        FROM tags
        ORDER BY name
        LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(tags)
}
