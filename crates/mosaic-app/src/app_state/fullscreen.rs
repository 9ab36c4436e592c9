//! Host side of in-panel fullscreen: a panel whose page went fullscreen
//! is expanded over the whole window, and the window's Escape key is
//! forwarded to it.

use super::core::MosaicApp;
use super::types::EXIT_FULLSCREEN_SCRIPT;

impl MosaicApp {
    /// React to a panel's `fullscreen_change` report.
    pub(super) fn handle_fullscreen_change(&mut self, pane_id: u32, active: bool) {
        if active {
            self.expand_panel(pane_id);
        } else {
            self.collapse_panel(pane_id);
        }
    }

    fn expand_panel(&mut self, pane_id: u32) -> bool {
        if !self.tiling.enter_fullscreen(pane_id) {
            tracing::debug!(
                pane_id,
                expanded = ?self.tiling.fullscreen_id(),
                "Expand refused"
            );
            return false;
        }
        tracing::info!(pane_id, "Panel expanded to window");
        self.sync_webview_bounds();
        if let Some(handle) = self.webviews.as_ref().and_then(|r| r.get(pane_id)) {
            if let Err(e) = handle.focus() {
                tracing::warn!(pane_id, error = %e, "Failed to focus expanded webview");
            }
        }
        self.update_window_title();
        true
    }

    /// Put an expanded panel back into its grid cell.
    pub(super) fn collapse_panel(&mut self, pane_id: u32) -> bool {
        if !self.tiling.exit_fullscreen(pane_id) {
            return false;
        }
        tracing::info!(pane_id, "Panel returned to grid");
        self.sync_webview_bounds();
        self.update_window_title();
        true
    }

    /// Escape in the host window: ask the expanded panel's page to leave
    /// fullscreen. Without a live webview to ask, collapse directly.
    pub(super) fn request_exit_fullscreen(&mut self) -> bool {
        let Some(pane_id) = self.tiling.fullscreen_id() else {
            return false;
        };

        let asked = match self.webviews.as_ref().and_then(|r| r.get(pane_id)) {
            Some(handle) => match handle.evaluate_script(EXIT_FULLSCREEN_SCRIPT) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!(pane_id, error = %e, "Failed to ask page to exit fullscreen");
                    false
                }
            },
            None => false,
        };

        if !asked {
            self.collapse_panel(pane_id);
        }
        true
    }
}
