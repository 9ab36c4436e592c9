//! Panel grid layout configuration types.

use serde::{Deserialize, Serialize};

/// Panel grid configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Gap between panels in pixels (valid range: 0-40).
    pub panel_gap: u32,
    /// Padding between the grid and the window edge (valid range: 0-40).
    pub outer_padding: u32,
    /// Height of the toolbar strip above the grid (valid range: 24-96).
    pub toolbar_height: u32,
    /// Height of each panel's URL bar (valid range: 24-80).
    pub url_bar_height: u32,
    /// Maximum number of open panels (valid range: 1-16).
    pub max_panels: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            panel_gap: 8,
            outer_padding: 8,
            toolbar_height: 44,
            url_bar_height: 40,
            max_panels: 8,
        }
    }
}
