//! API Data Transfer Objects.
//!
//! These types define the wire format for the REST API. They are separate
//! from the internal domain models in `src/models/` and handle
//! serialization and deserialization only.

pub mod auth;
pub mod ocr;

pub use auth::*;
pub use ocr::*;
