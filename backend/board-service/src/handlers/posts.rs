/// Post handlers - HTTP endpoints for post operations
use crate::db::like_repo;
use crate::error::Result;
use crate::services::{NewPost, PostDetail, PostService};
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub industry_id: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CreatePostResponse {
    pub status: String,
    pub message: String,
    pub post_id: i64,
}

#[derive(Debug, Serialize)]
pub struct DeletePostResponse {
    pub success: bool,
    pub message: String,
}

// Query-string deserialization cannot flatten PaginationParams here, so the
// paging fields are spelled out.
#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    pub industry_id: Option<i64>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    20
}

#[derive(Debug, Deserialize)]
pub struct GetPostQuery {
    /// Optional viewer id; when present the response carries the viewer's
    /// like state
    pub viewer: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct PostDetailResponse {
    #[serde(flatten)]
    pub detail: PostDetail,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub liked: Option<bool>,
}

/// Save a new post together with its tags
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let req = req.into_inner();

    let post = service
        .create_post(NewPost {
            title: req.title,
            content: req.content,
            user_id: req.user_id,
            industry_id: req.industry_id,
            tags: req.tags,
        })
        .await?;

    Ok(HttpResponse::Created().json(CreatePostResponse {
        status: "success".to_string(),
        message: "post created".to_string(),
        post_id: post.id,
    }))
}

/// Get a post by ID, with tags and comment count
pub async fn get_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    query: web::Query<GetPostQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());

    let detail = match service.get_post(*post_id).await? {
        Some(detail) => detail,
        None => return Ok(HttpResponse::NotFound().finish()),
    };

    let liked = match query.viewer {
        Some(viewer_id) => Some(like_repo::has_liked(&pool, viewer_id, *post_id).await?),
        None => None,
    };

    Ok(HttpResponse::Ok().json(PostDetailResponse { detail, liked }))
}

/// List posts, newest first
pub async fn list_posts(
    pool: web::Data<PgPool>,
    query: web::Query<ListPostsQuery>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service
        .list_posts(query.industry_id, query.limit, query.offset)
        .await?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Delete a post and its dependents
///
/// Deleting an already-deleted post reports success; the outcome the client
/// cares about (the post is gone) holds either way.
pub async fn delete_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let deleted = service.delete_post(*post_id).await?;

    let message = if deleted {
        "post deleted"
    } else {
        "post already deleted"
    };

    Ok(HttpResponse::Ok().json(DeletePostResponse {
        success: true,
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_default_to_empty_when_absent() {
        let req: CreatePostRequest = serde_json::from_str(
            r#"{"title": "가게 소개", "content": "잘 부탁드립니다", "user_id": 7}"#,
        )
        .unwrap();

        assert!(req.tags.is_empty());
        assert!(req.industry_id.is_none());
    }

    #[test]
    fn delete_response_keeps_the_client_wire_shape() {
        let response = DeletePostResponse {
            success: true,
            message: "post deleted".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "post deleted");
    }
}
