/// Database access layer
///
/// Repository functions for single-statement reads and writes against the
/// injected pool. Multi-statement operations that need a transaction (like
/// toggle, cascade delete, post save with tags) live in the service layer so
/// the transaction boundary is visible where the invariant is enforced.
pub mod comment_repo;
pub mod like_repo;
pub mod post_repo;
pub mod report_repo;
pub mod tag_repo;
