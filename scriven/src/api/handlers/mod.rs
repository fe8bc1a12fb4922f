pub mod auth;
pub mod ocr;
pub(crate) mod root;

pub use root::root;
