/// Comment handlers - HTTP endpoints for comments under a post
use crate::error::Result;
use crate::handlers::PaginationParams;
use crate::services::CommentService;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub user_id: i64,
    pub content: String,
}

/// Create a comment on a post
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comment = service
        .create_comment(*post_id, req.user_id, &req.content)
        .await?;

    Ok(HttpResponse::Created().json(comment))
}

/// Get comments for a post, oldest first
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let service = CommentService::new((**pool).clone());
    let comments = service
        .get_post_comments(*post_id, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(comments))
}
