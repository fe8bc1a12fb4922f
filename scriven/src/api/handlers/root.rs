use axum::Json;

use crate::api::dto::MessageResponse;

/// `GET /`
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Backend liveness acknowledgment", body = MessageResponse),
    )
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Backend working"))
}
