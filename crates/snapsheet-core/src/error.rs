use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Model data not found: {0}")]
    ModelDataMissing(PathBuf),

    #[error("Invalid capture region: {0}")]
    InvalidRegion(String),

    #[error("Hotkey registration failed: {0}")]
    Hotkey(String),

    #[error("Screen capture failed: {0}")]
    Capture(String),

    #[error("OCR engine is not initialized")]
    EngineNotInitialized,

    #[error("Text recognition failed: {0}")]
    Recognition(String),

    #[error("Workbook not found: {0}")]
    WorkbookMissing(PathBuf),

    #[error("Workbook is not open: {0}")]
    WorkbookNotOpen(PathBuf),

    #[error("More than one open workbook matches: {0}")]
    AmbiguousWorkbook(PathBuf),

    #[error("Sheet '{0}' does not exist")]
    SheetNotFound(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Failed to save workbook: {0}")]
    Save(String),

    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
