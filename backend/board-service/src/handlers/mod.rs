/// HTTP handlers for board endpoints
///
/// This module contains handlers for:
/// - Posts: save with tags, read, list, cascade delete
/// - Likes: toggle endpoint used by the board screens
/// - Comments: create and list under a post
/// - Reports: file a report, duplicate-safe
/// - Tags: tag listing for the tag picker
pub mod comments;
pub mod likes;
pub mod posts;
pub mod reports;
pub mod tags;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments};
pub use likes::toggle_like;
pub use posts::{create_post, delete_post, get_post, list_posts};
pub use reports::report_post;
pub use tags::list_tags;

use serde::Deserialize;

/// Pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}
