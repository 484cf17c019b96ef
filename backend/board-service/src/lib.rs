/// Board Service Library
///
/// Handles the community board for the Plaza small-business platform: posts,
/// likes with a denormalized counter, comments, reports, and free-text tags.
///
/// # Modules
///
/// - `handlers`: Board-related HTTP request handlers
/// - `models`: Data structures for posts, likes, comments, reports, tags
/// - `services`: Business logic layer (toggle, cascade delete, tag upsert)
/// - `db`: Database access layer and repositories
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
