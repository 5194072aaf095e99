use std::sync::Arc;

use snapsheet_config::Config;
use snapsheet_ocr::TessRecognizer;
use tokio::sync::RwLock;

use crate::status::AppStatus;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    /// `None` when the trained-model check failed at startup. The
    /// process keeps running; every trigger then fails with an explicit
    /// engine-not-initialized error.
    pub recognizer: Option<TessRecognizer>,
    pub status: AppStatus,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let model_dir = config
            .ocr
            .model_dir
            .clone()
            .unwrap_or_else(snapsheet_ocr::default_model_dir);

        let recognizer = snapsheet_ocr::ensure_model_data(&model_dir, &config.ocr.language)
            .and_then(|_| TessRecognizer::new(&model_dir, &config.ocr.language))
            .map_err(|e| tracing::error!("OCR engine unavailable: {e}"))
            .ok();

        Self {
            config: Arc::new(RwLock::new(config)),
            recognizer,
            status: AppStatus::new(),
        }
    }
}
