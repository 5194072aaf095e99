mod capture;
mod hotkey;
mod ocr;

pub use capture::{ScreenCapturer, capture_screen_region};
pub use hotkey::HotkeyManager;
pub use ocr::{TessRecognizer, default_model_dir, ensure_model_data};
