/// Tag resolution - maps free-text tag names to tag rows, creating missing
/// ones, and links them to a post inside the caller's transaction
use crate::error::{AppError, Result};
use sqlx::{Postgres, Transaction};
use std::collections::HashSet;

/// Trim and deduplicate tag names, first occurrence wins
///
/// Matching is exact after trimming; "Spam" and "spam" stay distinct tags.
/// A blank name anywhere in the sequence rejects the whole request, before
/// any transaction starts.
pub fn normalize_names(names: &[String]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut normalized = Vec::new();

    for raw in names {
        let name = raw.trim();
        if name.is_empty() {
            return Err(AppError::Validation("tag names must not be blank".to_string()));
        }
        if seen.insert(name.to_string()) {
            normalized.push(name.to_string());
        }
    }

    Ok(normalized)
}

/// Resolve each name to a tag id and link it to the post
///
/// Runs on the caller's transaction so a post save is all-or-nothing: any
/// tag failing to resolve or link aborts the whole save. Returns the number
/// of links written. Names are expected to be normalized already.
pub async fn resolve_and_link(
    tx: &mut Transaction<'_, Postgres>,
    post_id: i64,
    names: &[String],
) -> Result<usize> {
    for name in names {
        let tag_id = resolve_tag_id(tx, name).await?;

        sqlx::query(
            r#"
            INSERT INTO post_tags (post_id, tag_id)
            VALUES ($1, $2)
            ON CONFLICT (post_id, tag_id) DO NOTHING
            "#,
        )
        .bind(post_id)
        .bind(tag_id)
        .execute(&mut **tx)
        .await?;
    }

    Ok(names.len())
}

/// Insert-or-ignore-then-select against the unique name constraint
///
/// Two writers racing on a brand-new name both reach the insert; exactly one
/// row wins, the loser reads it back. No duplicate tags, no check-then-insert
/// window.
async fn resolve_tag_id(tx: &mut Transaction<'_, Postgres>, name: &str) -> Result<i64> {
    let inserted: Option<i64> = sqlx::query_scalar(
        r#"
        INSERT INTO tags (name)
        VALUES ($1)
        ON CONFLICT (name) DO NOTHING
        RETURNING tag_id
        "#,
    )
    .bind(name)
    .fetch_optional(&mut **tx)
    .await?;

    match inserted {
        Some(tag_id) => Ok(tag_id),
        None => {
            let tag_id: i64 = sqlx::query_scalar("SELECT tag_id FROM tags WHERE name = $1")
                .bind(name)
                .fetch_one(&mut **tx)
                .await?;
            Ok(tag_id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_dedupes_keeping_first_occurrence() {
        let names = vec![
            "누구나".to_string(),
            "음식점".to_string(),
            "누구나".to_string(),
        ];
        let normalized = normalize_names(&names).unwrap();
        assert_eq!(normalized, vec!["누구나", "음식점"]);
    }

    #[test]
    fn normalize_trims_whitespace() {
        let names = vec!["  cafe ".to_string(), "cafe".to_string()];
        let normalized = normalize_names(&names).unwrap();
        assert_eq!(normalized, vec!["cafe"]);
    }

    #[test]
    fn normalize_rejects_blank_names() {
        let names = vec!["cafe".to_string(), "   ".to_string()];
        assert!(normalize_names(&names).is_err());
    }

    #[test]
    fn normalize_is_case_sensitive() {
        let names = vec!["Spam".to_string(), "spam".to_string()];
        let normalized = normalize_names(&names).unwrap();
        assert_eq!(normalized.len(), 2);
    }

    #[test]
    fn normalize_of_empty_sequence_is_a_noop() {
        assert!(normalize_names(&[]).unwrap().is_empty());
    }
}
