//! In-panel fullscreen configuration types.

use mosaic_fullscreen::options::{DEFAULT_INDICATOR_ATTRIBUTE, DEFAULT_Z_INDEX};
use mosaic_fullscreen::ShimOptions;
use serde::{Deserialize, Serialize};

/// Fullscreen interception settings for content panels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FullscreenConfig {
    /// Inject the fullscreen shim into content panels.
    pub enabled: bool,
    /// Stacking order of the fullscreen element (must be > 0).
    pub z_index: u32,
    /// Backdrop behind the fullscreen element (hex or rgb()).
    pub background: String,
    /// `data-*` attribute set on the fullscreen element.
    pub indicator_attribute: String,
    pub exit_on_escape: bool,
    pub exit_on_outside_click: bool,
    /// Fade video-player chrome while fullscreen.
    pub hide_player_chrome: bool,
}

impl Default for FullscreenConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            z_index: DEFAULT_Z_INDEX,
            background: "#000000".into(),
            indicator_attribute: DEFAULT_INDICATOR_ATTRIBUTE.into(),
            exit_on_escape: true,
            exit_on_outside_click: true,
            hide_player_chrome: true,
        }
    }
}

impl FullscreenConfig {
    /// Options handed to the shim renderer.
    pub fn shim_options(&self) -> ShimOptions {
        ShimOptions {
            z_index: self.z_index,
            background: self.background.clone(),
            indicator_attribute: self.indicator_attribute.clone(),
            exit_on_escape: self.exit_on_escape,
            exit_on_outside_click: self.exit_on_outside_click,
            hide_player_chrome: self.hide_player_chrome,
        }
    }
}
