/// Like handlers - HTTP endpoint for the like toggle
use crate::error::Result;
use crate::services::LikeService;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

#[derive(Debug, Deserialize)]
pub struct ToggleLikeRequest {
    pub user_id: i64,
    pub post_id: i64,
}

#[derive(Debug, Serialize)]
pub struct ToggleLikeResponse {
    pub status: String,
    pub liked: bool,
    pub message: String,
}

/// Toggle a like on a post
pub async fn toggle_like(
    pool: web::Data<PgPool>,
    req: web::Json<ToggleLikeRequest>,
) -> Result<HttpResponse> {
    let service = LikeService::new((**pool).clone());
    let liked = service.toggle(req.user_id, req.post_id).await?;

    let message = if liked { "post liked" } else { "like removed" };

    Ok(HttpResponse::Ok().json(ToggleLikeResponse {
        status: "success".to_string(),
        liked,
        message: message.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_keeps_the_client_wire_shape() {
        let response = ToggleLikeResponse {
            status: "success".to_string(),
            liked: true,
            message: "post liked".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["liked"], true);
        assert_eq!(json["message"], "post liked");
    }
}
