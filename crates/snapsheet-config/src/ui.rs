use serde::{Deserialize, Serialize};

fn default_bell() -> bool {
    true
}

fn default_preview_chars() -> usize {
    80
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Terminal bell on a successful append.
    #[serde(default = "default_bell")]
    pub bell: bool,
    /// How much of the recognized text the status line shows.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,
}

impl UiConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            bell: default_bell(),
            preview_chars: default_preview_chars(),
        }
    }
}
