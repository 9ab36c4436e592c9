//! WebView lifecycle management: create, destroy, sync bounds, poll events.

use mosaic_common::types::{Color, Rect};
use mosaic_webview::ipc::host_hook_script;
use mosaic_webview::manager::CHROME_WEBVIEW_ID;
use mosaic_webview::{PageLoadState, WebViewConfig, WebViewEvent};

use crate::app_state::core::MosaicApp;
use crate::app_state::types::CHROME_URL;

use super::bounds::{panel_frames, tiling_rect_to_wry, ChromeMetrics, PanelFrame};

impl MosaicApp {
    /// Window area in logical pixels.
    pub(in crate::app_state) fn viewport(&self) -> Rect {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                Rect::new(0.0, 0.0, size.width, size.height)
            }
            None => Rect::default(),
        }
    }

    pub(in crate::app_state) fn chrome_metrics(&self) -> ChromeMetrics {
        ChromeMetrics {
            toolbar_height: self.config.layout.toolbar_height as f64,
            url_bar_height: self.config.layout.url_bar_height as f64,
        }
    }

    pub(in crate::app_state) fn frames(&self) -> Vec<PanelFrame> {
        panel_frames(&self.tiling, self.viewport(), self.chrome_metrics())
    }

    fn background_color(&self) -> Option<Color> {
        let value = &self.config.window.background;
        let color = Color::from_css(value);
        if color.is_none() {
            tracing::warn!(background = %value, "Unusable window background, using webview default");
        }
        color
    }

    /// Config for a content panel: IPC bridge, host hook, then the shim.
    fn content_config(&self, url: &str) -> WebViewConfig {
        let mut config = WebViewConfig::content(url);
        config.background = self.background_color();
        config.devtools = config.devtools || self.config.panels.devtools;
        config.autoplay = self.config.panels.autoplay;
        config.user_agent = self.config.panels.user_agent.clone();
        if let Some(ref shim) = self.shim_script {
            config = config
                .with_init_script(host_hook_script())
                .with_init_script(shim.clone());
        }
        config
    }

    /// Create the chrome webview covering the whole window.
    pub(in crate::app_state) fn create_chrome_webview(&mut self) {
        let Some(window) = self.window.clone() else {
            tracing::warn!("Cannot create chrome webview: no window");
            return;
        };
        let bounds = tiling_rect_to_wry(&self.viewport());
        let mut config = WebViewConfig::chrome(CHROME_URL);
        config.background = self.background_color();

        let Some(registry) = self.webviews.as_mut() else {
            tracing::warn!("Cannot create chrome webview: registry not initialized");
            return;
        };
        if let Err(e) = registry.create(CHROME_WEBVIEW_ID, window.as_ref(), bounds, config) {
            tracing::error!(error = %e, "Failed to create chrome webview");
        } else {
            tracing::info!("Chrome webview created");
        }
    }

    /// Create the content webview for a pane at its grid position.
    pub(in crate::app_state) fn create_webview_for_pane(&mut self, pane_id: u32, url: &str) {
        let Some(window) = self.window.clone() else {
            tracing::warn!(pane_id, "Cannot create webview: no window");
            return;
        };

        let bounds = self
            .frames()
            .iter()
            .find(|f| f.pane_id == pane_id)
            .map(|f| tiling_rect_to_wry(&f.content))
            .unwrap_or_default();
        let config = self.content_config(url);

        let Some(registry) = self.webviews.as_mut() else {
            tracing::warn!(pane_id, "Cannot create webview: registry not initialized");
            return;
        };
        if let Err(e) = registry.create(pane_id, window.as_ref(), bounds, config) {
            tracing::error!(pane_id, error = %e, "Failed to create webview");
        } else {
            tracing::info!(pane_id, url, "WebView created for pane");
        }
    }

    /// Destroy the webview for a pane.
    pub(in crate::app_state) fn destroy_webview_for_pane(&mut self, pane_id: u32) {
        if let Some(ref mut registry) = self.webviews {
            if registry.destroy(pane_id) {
                tracing::info!(pane_id, "WebView destroyed for pane");
            }
        }
    }

    /// Sync every webview to the current grid: the chrome fills the
    /// window, laid-out panels move to their frames, the rest are hidden.
    pub(in crate::app_state) fn sync_webview_bounds(&mut self) {
        let viewport = self.viewport();
        let frames = self.frames();
        let Some(registry) = self.webviews.as_mut() else {
            return;
        };

        if let Some(chrome) = registry.chrome() {
            if let Err(e) = chrome.set_bounds(tiling_rect_to_wry(&viewport)) {
                tracing::warn!(error = %e, "Failed to update chrome bounds");
            }
        }

        for pane_id in registry.active_panes() {
            let Some(handle) = registry.get_mut(pane_id) else {
                continue;
            };
            let frame = frames.iter().find(|f| f.pane_id == pane_id);
            let result = match frame {
                Some(frame) => handle
                    .set_bounds(tiling_rect_to_wry(&frame.content))
                    .and_then(|()| handle.set_visible(true)),
                None => handle.set_visible(false),
            };
            if let Err(e) = result {
                tracing::warn!(pane_id, error = %e, "Failed to update webview bounds");
            }
        }

        self.sync_chrome();
    }

    /// Process pending webview events (IPC messages, page loads, etc.).
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        let events: Vec<WebViewEvent> = match &self.webviews {
            Some(registry) => registry.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                WebViewEvent::IpcMessage { pane_id, body } => {
                    self.handle_ipc_message(pane_id, &body);
                }
                WebViewEvent::PageLoad {
                    pane_id,
                    state,
                    url,
                } => {
                    tracing::debug!(pane_id, ?state, url = %url, "WebView page load event");
                    self.handle_page_load(pane_id, state, url);
                }
                WebViewEvent::TitleChanged { pane_id, title } => {
                    tracing::debug!(pane_id, title = %title, "WebView title changed");
                    if self.tiling.set_title(pane_id, title) {
                        self.sync_chrome();
                        self.update_window_title();
                    }
                }
                WebViewEvent::NavigationRequested { pane_id, url } => {
                    tracing::debug!(pane_id, url = %url, "WebView navigation");
                }
                WebViewEvent::NewWindowRequested { pane_id, url } => {
                    tracing::info!(pane_id, url = %url, "Opening popup as a panel");
                    self.open_panel(Some(&url));
                }
                WebViewEvent::Closed { pane_id } => {
                    tracing::debug!(pane_id, "WebView closed event");
                }
            }
        }
    }

    /// A new document starts without in-page fullscreen, so an expanded
    /// panel that navigates goes back into the grid.
    fn handle_page_load(&mut self, pane_id: u32, state: PageLoadState, url: String) {
        if let Some(handle) = self.webviews.as_mut().and_then(|r| r.get_mut(pane_id)) {
            handle.set_current_url(url.clone());
        }
        match state {
            PageLoadState::Started => {
                if self.tiling.fullscreen_id() == Some(pane_id) {
                    self.collapse_panel(pane_id);
                }
            }
            PageLoadState::Finished => {
                if self.tiling.set_url(pane_id, url) {
                    self.sync_chrome();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use mosaic_config::MosaicConfig;
    use mosaic_webview::WebViewRole;

    use super::*;

    #[test]
    fn content_config_injects_into_every_frame() {
        let app = MosaicApp::new(MosaicConfig::default(), Vec::new());
        let config = app.content_config("https://example.com");

        assert_eq!(config.role, WebViewRole::Content);
        assert!(config.subframes);
        assert_eq!(config.init_scripts.len(), 2);
        assert!(config.init_scripts[1].contains("__mosaicFullscreen"));
    }

    #[test]
    fn background_accepts_rgb_functions() {
        let mut config = MosaicConfig::default();
        config.window.background = "rgba(17, 24, 39, 0.5)".into();
        let app = MosaicApp::new(config, Vec::new());
        assert_eq!(app.background_color(), Some(Color::from_rgba(17, 24, 39, 128)));
    }

    #[test]
    fn background_accepts_short_hex_with_alpha() {
        let mut config = MosaicConfig::default();
        config.window.background = "#000a".into();
        let app = MosaicApp::new(config, Vec::new());
        assert_eq!(app.background_color(), Some(Color::from_rgba(0, 0, 0, 170)));
    }
}
