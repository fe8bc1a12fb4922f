use serde::{Deserialize, Serialize};

/// Response body for `POST /ocr/extract-text`.
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ExtractedTextResponse {
    /// Recognized text with surrounding whitespace trimmed.
    pub extracted_text: String,
}
