use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a board post with its denormalized like counter
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub industry_id: Option<i64>,
    pub like_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Like entity - presence of a row means "user likes post"
///
/// The (user_id, post_id) pair is the primary key; at most one row may exist
/// per pair at any time.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Like {
    pub user_id: i64,
    pub post_id: i64,
}

/// Comment entity - owned by a post, removed with it
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Report entity - one per (post, user); status is driven by moderation
/// outside this service ('pending', 'resolved', 'rejected')
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Report {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub reason: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Tag entity - unique by name, created lazily, never deleted here
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
