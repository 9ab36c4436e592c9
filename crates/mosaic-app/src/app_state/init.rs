//! Window creation and webview setup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use mosaic_webview::{ContentProvider, WebViewManager, WebViewRegistry};

use super::core::MosaicApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative path from the working directory to optional on-disk assets.
const ASSETS_DIR: &str = "assets";

/// Chrome page assets compiled into the binary: (path, mime, contents).
const CHROME_ASSETS: &[(&str, &str, &str)] = &[
    (
        "chrome/index.html",
        "text/html",
        include_str!("../../assets/chrome/index.html"),
    ),
    (
        "chrome/chrome.css",
        "text/css",
        include_str!("../../assets/chrome/chrome.css"),
    ),
    (
        "chrome/chrome.js",
        "application/javascript",
        include_str!("../../assets/chrome/chrome.js"),
    ),
];

// =============================================================================
// INITIALIZATION
// =============================================================================

impl MosaicApp {
    /// Create the window and the chrome webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                self.config.window.width as f64,
                self.config.window.height as f64,
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        self.window = Some(window);

        self.initialize_webviews();
        self.create_chrome_webview();

        tracing::info!("Window created");
        true
    }

    /// Set up the WebView registry with the content provider for `mosaic://`.
    fn initialize_webviews(&mut self) {
        let assets_path = std::env::current_dir().unwrap_or_default().join(ASSETS_DIR);

        let mut content_provider = ContentProvider::new(&assets_path);
        for (path, mime, contents) in CHROME_ASSETS {
            content_provider.add_override(*path, *mime, contents.as_bytes());
        }

        let mut manager = WebViewManager::new();
        manager.set_content_provider(content_provider);

        self.webviews = Some(WebViewRegistry::new(manager));
        tracing::info!(
            assets_dir = %assets_path.display(),
            "WebView registry initialized"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chrome_assets_are_served_from_memory() {
        let mut provider = ContentProvider::new("/nonexistent");
        for (path, mime, contents) in CHROME_ASSETS {
            provider.add_override(*path, *mime, contents.as_bytes());
        }

        let (mime, data) = provider.resolve("chrome/index.html").unwrap();
        assert_eq!(mime, "text/html");
        assert!(String::from_utf8_lossy(&data).contains("chrome.js"));
        assert!(provider.resolve("/chrome/chrome.css").is_some());
        assert!(provider.resolve("chrome/missing.js").is_none());
    }
}
