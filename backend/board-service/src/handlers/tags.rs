/// Tag handlers - tag listing for the tag picker
use crate::db::tag_repo;
use crate::error::Result;
use crate::handlers::PaginationParams;
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// List known tags, alphabetically
pub async fn list_tags(
    pool: web::Data<PgPool>,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let tags = tag_repo::list_tags(&pool, query.limit, query.offset).await?;

    Ok(HttpResponse::Ok().json(tags))
}
