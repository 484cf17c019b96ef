/// Report service - files reports against posts, one per reporter
use crate::db::{post_repo, report_repo};
use crate::error::{AppError, Result};
use crate::models::Report;
use crate::services::ensure_positive_id;
use sqlx::PgPool;

pub struct ReportService {
    pool: PgPool,
}

impl ReportService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a report against a post
    ///
    /// Returns (Report, was_created). A repeat report from the same user
    /// comes back with `was_created = false` and the original row; no second
    /// row is ever written.
    pub async fn report(&self, post_id: i64, user_id: i64, reason: &str) -> Result<(Report, bool)> {
        ensure_positive_id("post_id", post_id)?;
        ensure_positive_id("user_id", user_id)?;
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(AppError::Validation("reason must not be empty".to_string()));
        }

        if !post_repo::post_exists(&self.pool, post_id).await? {
            return Err(AppError::NotFound(format!("post {} not found", post_id)));
        }

        let (report, created) =
            report_repo::create_report(&self.pool, post_id, user_id, reason).await?;

        if created {
            tracing::info!(report_id = report.id, post_id, user_id, "report filed");
        }

        Ok((report, created))
    }
}
