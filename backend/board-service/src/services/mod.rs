/// Business logic layer for board-service
///
/// This module provides high-level operations:
/// - Post service: post save with tags, reads, cascade delete
/// - Like service: like toggle with counter maintenance
/// - Comment service: comment creation and listing
/// - Report service: report filing with duplicate rejection
/// - Tags: name normalization and transactional upsert/link
pub mod comments;
pub mod likes;
pub mod posts;
pub mod reports;
pub mod tags;

// Re-export commonly used services
pub use comments::CommentService;
pub use likes::LikeService;
pub use posts::{NewPost, PostDetail, PostService};
pub use reports::ReportService;

use crate::error::{AppError, Result};

/// Reject missing/zero/negative identifiers before any statement runs
pub(crate) fn ensure_positive_id(field: &str, value: i64) -> Result<()> {
    if value <= 0 {
        return Err(AppError::Validation(format!(
            "{} must be a positive identifier",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_and_negative_ids() {
        assert!(ensure_positive_id("user_id", 0).is_err());
        assert!(ensure_positive_id("post_id", -3).is_err());
        assert!(ensure_positive_id("post_id", 1).is_ok());
    }
}
