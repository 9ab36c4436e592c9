//! MosaicApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use mosaic_config::MosaicConfig;
use mosaic_tiling::{LayoutEngine, TilingManager};
use mosaic_webview::WebViewRegistry;

/// Top-level application state.
pub struct MosaicApp {
    pub(super) config: MosaicConfig,

    /// Addresses given on the command line; they replace the configured
    /// initial panels.
    pub(super) startup_urls: Vec<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Panel grid
    pub(super) tiling: TilingManager,

    // Chrome page plus one webview per panel
    pub(super) webviews: Option<WebViewRegistry>,

    /// Fullscreen shim injected into every content panel, rendered once.
    pub(super) shim_script: Option<String>,

    /// Set once the chrome page has registered its IPC handlers.
    pub(super) chrome_ready: bool,

    pub(super) last_poll: Instant,
}

impl MosaicApp {
    pub fn new(config: MosaicConfig, startup_urls: Vec<String>) -> Self {
        let tiling = TilingManager::with_layout(LayoutEngine {
            gap: config.layout.panel_gap,
            outer_padding: config.layout.outer_padding,
        });

        let shim_script = if config.fullscreen.enabled {
            match mosaic_fullscreen::render_shim_script(&config.fullscreen.shim_options()) {
                Ok(script) => Some(script),
                Err(e) => {
                    tracing::warn!(error = %e, "Fullscreen shim disabled: failed to render");
                    None
                }
            }
        } else {
            tracing::info!("Fullscreen shim disabled by config");
            None
        };

        Self {
            config,
            startup_urls,
            window: None,
            tiling,
            webviews: None,
            shim_script,
            chrome_ready: false,
            last_poll: Instant::now(),
        }
    }
}
