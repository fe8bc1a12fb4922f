//! Scriven: a minimal self-hostable backend for user accounts and image
//! text extraction.
//!
//! Three HTTP endpoints: register an account, verify credentials, and run
//! OCR over an uploaded image. Persistence goes through libsql, password
//! hashing through Argon2, and text recognition through Tesseract.

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod ocr;
