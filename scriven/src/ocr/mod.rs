//! OCR (Optical Character Recognition) module.
//!
//! Uploaded bytes are decoded with the `image` crate first; every decode
//! failure collapses into one reported error kind that keeps the underlying
//! cause for diagnostics only. Decoded images are re-encoded to PNG and
//! handed to Tesseract via `leptess`.
//!
//! Configuration lives in `OcrConfig` (see `config.rs`):
//! - `languages`: comma-separated ISO 639-2 language codes
//! - `timeout_secs`: upper bound on a single recognition call

mod decode;
mod provider;

pub use decode::normalize_image;
pub use provider::OcrProvider;
