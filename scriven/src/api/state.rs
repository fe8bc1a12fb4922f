use std::sync::Arc;

use crate::config::Config;
use crate::db::DatabaseBackend;
use crate::ocr::OcrProvider;

/// Shared request state. The database handle is constructed once in `main`
/// and injected here rather than living in a module-level singleton.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Arc<dyn DatabaseBackend>,
    pub ocr: OcrProvider,
}

impl AppState {
    pub fn new(config: Config, db: Arc<dyn DatabaseBackend>, ocr: OcrProvider) -> Self {
        Self {
            config: Arc::new(config),
            db,
            ocr,
        }
    }
}
