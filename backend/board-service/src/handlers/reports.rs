/// Report handlers - HTTP endpoint for filing a report against a post
use crate::error::Result;
use crate::services::ReportService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct ReportPostRequest {
    pub user_id: i64,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct ReportPostResponse {
    pub status: String,
    pub message: String,
}

/// File a report against a post
///
/// A repeat report from the same user gets a 409 with a clear message; the
/// original report row is untouched.
pub async fn report_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    req: web::Json<ReportPostRequest>,
) -> Result<HttpResponse> {
    let service = ReportService::new((**pool).clone());
    let (_report, created) = service.report(*post_id, req.user_id, &req.reason).await?;

    if created {
        Ok(HttpResponse::Created().json(ReportPostResponse {
            status: "success".to_string(),
            message: "report submitted".to_string(),
        }))
    } else {
        Ok(HttpResponse::Conflict().json(ReportPostResponse {
            status: "error".to_string(),
            message: "already reported".to_string(),
        }))
    }
}
