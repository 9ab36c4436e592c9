//! Tunables for the fullscreen shim.

use serde::{Deserialize, Serialize};

use crate::sanitize::{validate_attribute_name, validate_css_color};

/// Stacking order that places the fullscreen element above page content.
pub const DEFAULT_Z_INDEX: u32 = 999_999;

/// Marker attribute present on the element while it is fullscreen.
pub const DEFAULT_INDICATOR_ATTRIBUTE: &str = "data-custom-fullscreen";

/// Options shared by the Rust machine and the generated page script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShimOptions {
    /// `z-index` applied to the fullscreen element.
    pub z_index: u32,
    /// Opaque backdrop behind the fullscreen element (hex or rgb()).
    pub background: String,
    /// `data-*` attribute marking the fullscreen element.
    pub indicator_attribute: String,
    /// Exit when Escape is pressed while fullscreen.
    pub exit_on_escape: bool,
    /// Exit when a click lands outside the fullscreen element.
    pub exit_on_outside_click: bool,
    /// Fade common video-player chrome while fullscreen, showing it on hover.
    pub hide_player_chrome: bool,
}

impl Default for ShimOptions {
    fn default() -> Self {
        Self {
            z_index: DEFAULT_Z_INDEX,
            background: "#000000".into(),
            indicator_attribute: DEFAULT_INDICATOR_ATTRIBUTE.into(),
            exit_on_escape: true,
            exit_on_outside_click: true,
            hide_player_chrome: true,
        }
    }
}

impl ShimOptions {
    /// Validated copy of `self`, falling back to defaults field by field.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut options = self.clone();
        if let Err(e) = validate_css_color(&options.background) {
            tracing::warn!(error = %e, "fullscreen background rejected, using default");
            options.background = defaults.background;
        }
        if let Err(e) = validate_attribute_name(&options.indicator_attribute) {
            tracing::warn!(error = %e, "fullscreen indicator attribute rejected, using default");
            options.indicator_attribute = defaults.indicator_attribute;
        }
        if options.z_index == 0 {
            options.z_index = defaults.z_index;
        }
        options
    }
}
