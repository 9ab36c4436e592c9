use std::collections::BTreeMap;

use tracing::debug;
use wry::raw_window_handle;

use crate::events::WebViewEvent;

use super::handle::WebViewHandle;
use super::types::{WebViewConfig, CHROME_WEBVIEW_ID};
use super::WebViewManager;

/// Maps pane IDs to WebView handles on top of a `WebViewManager`.
/// The chrome webview is registered under [`CHROME_WEBVIEW_ID`].
pub struct WebViewRegistry {
    manager: WebViewManager,
    handles: BTreeMap<u32, WebViewHandle>,
}

impl WebViewRegistry {
    pub fn new(manager: WebViewManager) -> Self {
        Self {
            manager,
            handles: BTreeMap::new(),
        }
    }

    /// Create a WebView for a pane and register it. An existing webview
    /// under the same ID is dropped first.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &mut self,
        pane_id: u32,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<(), wry::Error> {
        let handle = self.manager.create(pane_id, window, bounds, config)?;
        if self.handles.insert(pane_id, handle).is_some() {
            debug!(pane_id, "replaced existing WebView");
        }
        Ok(())
    }

    pub fn get(&self, pane_id: u32) -> Option<&WebViewHandle> {
        self.handles.get(&pane_id)
    }

    pub fn get_mut(&mut self, pane_id: u32) -> Option<&mut WebViewHandle> {
        self.handles.get_mut(&pane_id)
    }

    /// The chrome webview, once created.
    pub fn chrome(&self) -> Option<&WebViewHandle> {
        self.handles.get(&CHROME_WEBVIEW_ID)
    }

    /// Destroy a WebView by pane ID.
    pub fn destroy(&mut self, pane_id: u32) -> bool {
        if self.handles.remove(&pane_id).is_some() {
            debug!(pane_id, "WebView destroyed");
            self.manager.push_event(WebViewEvent::Closed { pane_id });
            true
        } else {
            false
        }
    }

    /// IDs of content panels with a live WebView, ascending.
    pub fn active_panes(&self) -> Vec<u32> {
        self.handles
            .keys()
            .copied()
            .filter(|id| *id != CHROME_WEBVIEW_ID)
            .collect()
    }

    /// Drain all pending events from all WebViews.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.manager.drain_events()
    }

    /// Destroy every WebView, panels first and the chrome last.
    pub fn destroy_all(&mut self) {
        for pane_id in self.active_panes() {
            self.destroy(pane_id);
        }
        self.destroy(CHROME_WEBVIEW_ID);
    }

    /// How many WebViews are alive, chrome included.
    pub fn count(&self) -> usize {
        self.handles.len()
    }
}
