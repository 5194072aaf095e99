use std::env;

use serde::{Deserialize, Serialize};

fn default_combo() -> String {
    "ctrl+shift+KeyS".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    /// Combination string, e.g. "ctrl+shift+KeyS" or "F9".
    #[serde(default = "default_combo")]
    pub combo: String,
}

impl HotkeyConfig {
    pub fn new() -> Self {
        let combo = env::var("SNAPSHEET_HOTKEY").unwrap_or_else(|_| default_combo());
        Self { combo }
    }
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            combo: default_combo(),
        }
    }
}
