use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rusty_tesseract::{Args, Image};
use snapsheet_core::error::Error;
use snapsheet_core::traits::TextRecognizer;

/// `tessdata` beside the executable, the layout the original deployment
/// shipped with.
pub fn default_model_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("tessdata")))
        .unwrap_or_else(|| PathBuf::from("tessdata"))
}

/// Verify the trained-model file exists before any engine is built.
///
/// This runs at startup; a failure leaves the recognizer unset for the
/// process lifetime.
pub fn ensure_model_data(dir: &Path, language: &str) -> Result<(), Error> {
    let trained = dir.join(format!("{language}.traineddata"));
    if !dir.is_dir() || !trained.is_file() {
        return Err(Error::ModelDataMissing(dir.to_path_buf()));
    }
    Ok(())
}

/// Tesseract engine handle. Inference itself is entirely the engine's
/// concern; this wrapper only feeds it bitmaps and collects text.
pub struct TessRecognizer {
    args: Args,
}

impl TessRecognizer {
    /// Build an engine for `language` reading models from `model_dir`.
    ///
    /// Call [`ensure_model_data`] first; this constructor only probes
    /// that the engine binary itself is reachable.
    pub fn new(model_dir: &Path, language: &str) -> Result<Self, Error> {
        // Tesseract resolves its model directory from the environment.
        // SAFETY: runs during single-threaded startup, before the async
        // runtime spawns any worker thread.
        unsafe { std::env::set_var("TESSDATA_PREFIX", model_dir) };

        rusty_tesseract::get_tesseract_version()
            .map_err(|e| Error::Recognition(format!("tesseract is not available: {e}")))?;

        let args = Args {
            lang: language.to_string(),
            config_variables: HashMap::new(),
            dpi: Some(150),
            // Uniform block of text, matches a fixed capture strip.
            psm: Some(6),
            oem: Some(3),
        };

        Ok(Self { args })
    }

    pub fn language(&self) -> &str {
        &self.args.lang
    }
}

impl TextRecognizer for TessRecognizer {
    fn recognize(&self, png: &[u8]) -> Result<String, Error> {
        let dynamic = image::load_from_memory(png)
            .map_err(|e| Error::Recognition(format!("failed to decode capture: {e}")))?;
        let image = Image::from_dynamic_image(&dynamic)
            .map_err(|e| Error::Recognition(e.to_string()))?;

        let text = rusty_tesseract::image_to_string(&image, &self.args)
            .map_err(|e| Error::Recognition(e.to_string()))?;
        tracing::debug!(chars = text.len(), "recognition complete");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_dir_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("tessdata");
        assert!(matches!(
            ensure_model_data(&gone, "deu"),
            Err(Error::ModelDataMissing(_))
        ));
    }

    #[test]
    fn dir_without_trained_model_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ensure_model_data(dir.path(), "deu"),
            Err(Error::ModelDataMissing(_))
        ));
    }

    #[test]
    fn trained_model_present_passes() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("deu.traineddata"), b"model").unwrap();
        assert!(ensure_model_data(dir.path(), "deu").is_ok());
    }
}
