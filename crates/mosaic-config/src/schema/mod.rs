//! Configuration schema types for Mosaic.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod fullscreen;
mod layout;
mod logging;
mod panels;
mod window;

pub use fullscreen::*;
pub use layout::*;
pub use logging::*;
pub use panels::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Mosaic.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct MosaicConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub panels: PanelsConfig,
    pub fullscreen: FullscreenConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_window_matches_host_defaults() {
        let config = MosaicConfig::default();
        assert_eq!(config.window.title, "Mosaic");
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.window.background, "#111827");
    }

    #[test]
    fn default_layout() {
        let config = MosaicConfig::default();
        assert_eq!(config.layout.panel_gap, 8);
        assert_eq!(config.layout.outer_padding, 8);
        assert_eq!(config.layout.max_panels, 8);
    }

    #[test]
    fn default_panels() {
        let config = MosaicConfig::default();
        assert_eq!(config.panels.initial_count, 1);
        assert_eq!(config.panels.home_url, "about:blank");
        assert!(config.panels.user_agent.is_none());
        assert!(config.panels.autoplay);
    }

    #[test]
    fn default_fullscreen_matches_shim_defaults() {
        let config = MosaicConfig::default();
        assert!(config.fullscreen.enabled);
        assert_eq!(
            config.fullscreen.shim_options(),
            mosaic_fullscreen::ShimOptions::default()
        );
    }

    #[test]
    fn log_level_directives() {
        assert_eq!(LogLevel::default().directive(), "mosaic=info");
        assert_eq!(LogLevel::Trace.directive(), "mosaic=trace");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: MosaicConfig = toml::from_str(
            r#"
[fullscreen]
z_index = 5000

[logging]
level = "debug"
"#,
        )
        .unwrap();
        assert_eq!(config.fullscreen.z_index, 5000);
        assert!(config.fullscreen.exit_on_escape);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.window.width, 1200);
    }

    #[test]
    fn user_agent_is_optional() {
        let config: MosaicConfig =
            toml::from_str("[panels]\nuser_agent = \"Mosaic/0.1\"\n").unwrap();
        assert_eq!(config.panels.user_agent.as_deref(), Some("Mosaic/0.1"));
    }
}
