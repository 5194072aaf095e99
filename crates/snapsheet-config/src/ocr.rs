use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use snapsheet_types::CaptureRegion;

fn default_language() -> String {
    "deu".to_string()
}

fn default_region() -> CaptureRegion {
    CaptureRegion {
        x: 0,
        y: 0,
        width: 400,
        height: 120,
    }
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct OcrConfig {
    #[serde(default = "default_language")]
    pub language: String,
    /// Trained-model directory. `None` means `tessdata` beside the
    /// executable, resolved at startup.
    pub model_dir: Option<PathBuf>,
    #[serde(default = "default_region")]
    pub capture_region: CaptureRegion,
}

impl OcrConfig {
    pub fn new() -> Self {
        let language = env::var("SNAPSHEET_OCR_LANGUAGE").unwrap_or_else(|_| default_language());
        let model_dir = env::var("SNAPSHEET_MODEL_DIR").ok().map(PathBuf::from);
        let capture_region = env::var("SNAPSHEET_REGION")
            .ok()
            .and_then(|v| parse_region(&v))
            .unwrap_or_else(default_region);

        Self {
            language,
            model_dir,
            capture_region,
        }
    }
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            model_dir: None,
            capture_region: default_region(),
        }
    }
}

/// "x,y,width,height" as used by SNAPSHEET_REGION.
pub fn parse_region(value: &str) -> Option<CaptureRegion> {
    let mut parts = value.split(',').map(str::trim);
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    let width = parts.next()?.parse().ok()?;
    let height = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(CaptureRegion {
        x,
        y,
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_string_round_trip() {
        let region = parse_region("0, 0, 400, 120").unwrap();
        assert_eq!(region.x, 0);
        assert_eq!(region.y, 0);
        assert_eq!(region.width, 400);
        assert_eq!(region.height, 120);
    }

    #[test]
    fn malformed_region_strings_are_rejected() {
        assert!(parse_region("400,120").is_none());
        assert!(parse_region("0,0,400,120,7").is_none());
        assert!(parse_region("a,b,c,d").is_none());
    }
}
