use std::env;

use serde::{Deserialize, Serialize};
use snapsheet_core::error::Error;
use snapsheet_core::traits::validate_region;

use self::excel::ExcelConfig;
use self::hotkey::HotkeyConfig;
use self::ocr::OcrConfig;
use self::ui::UiConfig;

pub mod excel;
pub mod hotkey;
pub mod ocr;
pub mod ui;

#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hotkey: HotkeyConfig,
    pub ocr: OcrConfig,
    pub excel: ExcelConfig,
    pub ui: UiConfig,

    /// Hotkey poll interval in milliseconds.
    pub delta_time: u64,
}

impl Config {
    pub fn new() -> Self {
        let delta_time = env::var("DELTA_TIME_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(100); // 100ms default

        Config {
            hotkey: HotkeyConfig::new(),
            ocr: OcrConfig::new(),
            excel: ExcelConfig::new(),
            ui: UiConfig::new(),
            delta_time,
        }
    }

    /// Startup sanity checks for values a config file cannot guarantee.
    pub fn validate(&self) -> Result<(), Error> {
        validate_region(&self.ocr.capture_region)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hotkey: HotkeyConfig::default(),
            ocr: OcrConfig::default(),
            excel: ExcelConfig::default(),
            ui: UiConfig::default(),
            delta_time: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn zero_height_region_fails_validation() {
        let mut config = Config::default();
        config.ocr.capture_region.height = 0;
        assert!(config.validate().is_err());
    }
}
