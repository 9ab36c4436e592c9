//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Host window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 320-7680).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 240-4320).
    pub height: u32,
    /// Window and chrome background color (hex or rgb()).
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Mosaic".into(),
            width: 1200,
            height: 800,
            background: "#111827".into(),
        }
    }
}
