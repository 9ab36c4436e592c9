//! Panel operations driven by the chrome page: add, close, navigate,
//! focus, and keeping the chrome's view of the grid current.

use serde_json::json;

use mosaic_webview::normalize_url;

use super::core::MosaicApp;

impl MosaicApp {
    /// Open the startup panels: one per `--url`, otherwise
    /// `panels.initial_count` panels at the home URL.
    pub(super) fn open_initial_panels(&mut self) {
        let urls = std::mem::take(&mut self.startup_urls);
        if urls.is_empty() {
            for _ in 0..self.config.panels.initial_count {
                self.open_panel(None);
            }
        } else {
            for url in &urls {
                self.open_panel(Some(url));
            }
        }
        if let Some(first) = self.tiling.ordered_pane_ids().first() {
            self.tiling.focus_pane(*first);
        }
    }

    /// Add a panel showing `input` (or the home URL when absent or blank).
    /// Returns `None` once `layout.max_panels` panels are open.
    pub(super) fn open_panel(&mut self, input: Option<&str>) -> Option<u32> {
        if self.tiling.pane_count() >= self.config.layout.max_panels as usize {
            tracing::warn!(
                max_panels = self.config.layout.max_panels,
                "Panel limit reached, not opening another"
            );
            return None;
        }

        let url = input
            .and_then(normalize_url)
            .unwrap_or_else(|| self.config.panels.home_url.clone());
        let pane_id = self.tiling.add_pane(url.clone());
        tracing::info!(pane_id, url = %url, "Panel opened");

        self.create_webview_for_pane(pane_id, &url);
        self.sync_webview_bounds();
        self.update_window_title();
        Some(pane_id)
    }

    /// Close a panel and its webview. Closing an expanded panel returns
    /// the window to the grid.
    pub(super) fn close_panel(&mut self, pane_id: u32) -> bool {
        if !self.tiling.close_pane(pane_id) {
            tracing::debug!(pane_id, "Close ignored: unknown panel");
            return false;
        }
        tracing::info!(pane_id, "Panel closed");
        self.destroy_webview_for_pane(pane_id);
        self.sync_webview_bounds();
        self.update_window_title();
        true
    }

    /// Point a panel at address-bar input.
    pub(super) fn navigate_panel(&mut self, pane_id: u32, input: &str) -> bool {
        let Some(url) = normalize_url(input) else {
            tracing::debug!(pane_id, "Navigate ignored: empty address");
            return false;
        };
        if !self.tiling.set_url(pane_id, url.clone()) {
            tracing::debug!(pane_id, "Navigate ignored: unknown panel");
            return false;
        }

        if let Some(handle) = self.webviews.as_mut().and_then(|r| r.get_mut(pane_id)) {
            if let Err(e) = handle.load_url(&url) {
                tracing::warn!(pane_id, url = %url, error = %e, "Failed to load URL");
            }
        }
        tracing::info!(pane_id, url = %url, "Panel navigated");
        self.sync_chrome();
        true
    }

    /// Focus a panel and hand keyboard focus to its webview.
    pub(super) fn focus_panel(&mut self, pane_id: u32) -> bool {
        if !self.tiling.focus_pane(pane_id) {
            return false;
        }
        if let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(pane_id)) {
            if let Err(e) = handle.focus() {
                tracing::warn!(pane_id, error = %e, "Failed to focus webview");
            }
        }
        self.sync_chrome();
        self.update_window_title();
        true
    }

    /// What the chrome page needs to draw the toolbar and URL bars.
    pub(super) fn panels_snapshot(&self) -> serde_json::Value {
        let frames = self.frames();
        let focused = self.tiling.focused_id();
        let panels: Vec<serde_json::Value> = self
            .tiling
            .panes()
            .iter()
            .map(|pane| {
                let cell = frames.iter().find(|f| f.pane_id == pane.id.0).map(|f| f.cell);
                json!({
                    "id": pane.id.0,
                    "url": pane.url,
                    "title": pane.title,
                    "focused": focused == Some(pane.id.0),
                    "cell": cell,
                })
            })
            .collect();

        json!({
            "panels": panels,
            "expanded": self.tiling.fullscreen_id(),
            "toolbarHeight": self.config.layout.toolbar_height,
            "urlBarHeight": self.config.layout.url_bar_height,
            "canAdd": self.tiling.pane_count() < self.config.layout.max_panels as usize,
        })
    }

    /// Push the current grid to the chrome page.
    pub(super) fn sync_chrome(&self) {
        if !self.chrome_ready {
            return;
        }
        let Some(chrome) = self.webviews.as_ref().and_then(|r| r.chrome()) else {
            return;
        };
        if let Err(e) = chrome.send_ipc("panels", &self.panels_snapshot()) {
            tracing::warn!(error = %e, "Failed to sync chrome");
        }
    }
}
