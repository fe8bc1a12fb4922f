use axum::Json;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};

use super::dto;
use super::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Scriven API",
        version = "0.1.0",
        description = "Minimal backend for user accounts and image text extraction.",
    ),
    paths(
        handlers::root::root,
        handlers::auth::register,
        handlers::auth::login,
        handlers::ocr::extract_text,
    ),
    components(schemas(
        dto::auth::RegisterRequest,
        dto::auth::LoginRequest,
        dto::auth::MessageResponse,
        dto::ocr::ExtractedTextResponse,
    )),
    tags(
        (name = "root", description = "Liveness"),
        (name = "auth", description = "Account registration and credential verification"),
        (name = "ocr", description = "Image text extraction"),
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn redoc_router<S: Clone + Send + Sync + 'static>() -> axum::Router<S> {
    Redoc::with_url("/docs", ApiDoc::openapi()).into()
}
