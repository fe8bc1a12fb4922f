use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::dto::ExtractedTextResponse;
use crate::api::state::AppState;
use crate::error::{Result, ScrivenError};
use crate::ocr::normalize_image;

/// `POST /ocr/extract-text`
///
/// Accepts a multipart form with a `file` field containing image bytes.
/// Undecodable uploads get a generic "Invalid image file" rejection; the
/// concrete decode failure stays in the logs.
#[utoipa::path(
    post,
    path = "/ocr/extract-text",
    tag = "ocr",
    request_body(content_type = "multipart/form-data", content = String, description = "Image file upload"),
    responses(
        (status = 200, description = "Recognized text, trimmed", body = ExtractedTextResponse),
        (status = 400, description = "Upload is not a decodable image"),
        (status = 503, description = "OCR engine unavailable"),
    )
)]
pub async fn extract_text(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractedTextResponse>> {
    let mut file_bytes: Option<Vec<u8>> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ScrivenError::Validation(format!("Malformed multipart request: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();

        if name == "file" {
            let bytes = field.bytes().await.map_err(|e| {
                ScrivenError::Validation(format!("Failed to read file: {e}"))
            })?;
            file_bytes = Some(bytes.to_vec());
        }
    }

    let bytes = file_bytes
        .ok_or_else(|| ScrivenError::Validation("Missing required 'file' field".to_string()))?;

    let normalized = normalize_image(&bytes)?;
    let extracted_text = state.ocr.recognize(&normalized).await?;

    Ok(Json(ExtractedTextResponse { extracted_text }))
}
