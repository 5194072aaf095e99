use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snapsheet_types::AppendStrategy;

fn default_workbook() -> PathBuf {
    PathBuf::from("ExcelTabelleOCR.xlsx")
}

fn default_sheet() -> String {
    "Daten".to_string()
}

fn default_skip_blank() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ExcelConfig {
    /// Full path of the target workbook.
    #[serde(default = "default_workbook")]
    pub workbook: PathBuf,
    #[serde(default = "default_sheet")]
    pub sheet: String,
    pub strategy: AppendStrategy,
    /// Drop whitespace-only recognitions instead of appending them.
    #[serde(default = "default_skip_blank")]
    pub skip_blank: bool,
}

impl ExcelConfig {
    pub fn new() -> Self {
        let workbook = env::var("SNAPSHEET_WORKBOOK")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_workbook());
        let sheet = env::var("SNAPSHEET_SHEET").unwrap_or_else(|_| default_sheet());
        let strategy = match env::var("SNAPSHEET_STRATEGY").as_deref() {
            Ok("live") => AppendStrategy::Live,
            _ => AppendStrategy::File,
        };
        let skip_blank = env::var("SNAPSHEET_SKIP_BLANK")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_skip_blank);

        Self {
            workbook,
            sheet,
            strategy,
            skip_blank,
        }
    }
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            workbook: default_workbook(),
            sheet: default_sheet(),
            strategy: AppendStrategy::default(),
            skip_blank: default_skip_blank(),
        }
    }
}
