use crate::models::Report;
use sqlx::PgPool;

/// File a report (idempotent per reporter)
///
/// Returns (Report, was_created). A duplicate (post_id, user_id) pair hits
/// the unique constraint, inserts nothing, and hands back the existing row
/// so callers can surface an "already reported" outcome.
pub async fn create_report(
    pool: &PgPool,
    post_id: i64,
    user_id: i64,
    reason: &str,
) -> Result<(Report, bool), sqlx::Error> {
    let inserted = sqlx::query_as::<_, Report>(
        r#"
        INSERT INTO reports (post_id, user_id, reason)
        VALUES ($1, $2, $3)
        ON CONFLICT (post_id, user_id) DO NOTHING
        RETURNING report_id AS id, post_id, user_id, reason, status, created_at
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(reason)
    .fetch_optional(pool)
    .await?;

    if let Some(report) = inserted {
        return Ok((report, true));
    }

    let existing = sqlx::query_as::<_, Report>(
        r#"
        SELECT report_id AS id, post_id, user_id, reason, status, created_at
        FROM reports
        WHERE post_id = $1 AND user_id = $2
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok((existing, false))
}

/// Count reports filed against a post
pub async fn count_reports_by_post(pool: &PgPool, post_id: i64) -> Result<i64, sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports WHERE post_id = $1")
        .bind(post_id)
        .fetch_one(pool)
        .await?;

    Ok(count)
}
