use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers;
use super::openapi;
use super::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth = Router::new()
        .route("/register", post(handlers::auth::register))
        .route("/login", post(handlers::auth::login));

    let ocr = Router::new().route("/extract-text", post(handlers::ocr::extract_text));

    Router::new()
        .route("/", get(handlers::root))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(openapi::redoc_router())
        .nest("/auth", auth)
        .nest("/ocr", ocr)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
