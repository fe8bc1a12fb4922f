use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::Router;

use scriven::api::{create_router, AppState};
use scriven::config::{Config, DatabaseConfig, OcrConfig, ServerConfig};
use scriven::db::{Database, DatabaseBackend, LibSqlBackend};
use scriven::ocr::OcrProvider;

/// Build a router backed by an in-memory database, returning the database
/// handle alongside so tests can inspect persisted state directly.
pub async fn setup_test_app() -> (Router, Arc<dyn DatabaseBackend>) {
    let config = Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8000,
        },
        database: DatabaseConfig {
            url: ":memory:".to_string(),
            auth_token: None,
            local_path: None,
            busy_timeout_ms: 5000,
            journal_mode: "WAL".to_string(),
            synchronous: "NORMAL".to_string(),
        },
        ocr: OcrConfig {
            languages: "eng".to_string(),
            timeout_secs: 60,
        },
    };

    let raw_db = Database::new(&config.database)
        .await
        .expect("Failed to create database");
    let db: Arc<dyn DatabaseBackend> = Arc::new(LibSqlBackend::new(raw_db));
    let ocr = OcrProvider::new(&config.ocr).expect("Failed to create OCR provider");

    let state = AppState::new(config, db.clone(), ocr);
    (create_router(state), db)
}

pub fn json_request(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a `multipart/form-data` request with a single `file` field.
pub fn multipart_file_request(uri: &str, file_name: &str, bytes: &[u8]) -> Request<Body> {
    let boundary = "scriven-test-boundary";
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
