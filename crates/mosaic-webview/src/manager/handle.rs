use wry::WebView;

use super::types::WebViewRole;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, evaluate JS, resize, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The pane ID this WebView belongs to.
    pub(super) pane_id: u32,
    pub(super) role: WebViewRole,
    /// Current URL (best-effort tracking).
    pub(super) current_url: String,
    /// Current title.
    pub(super) current_title: String,
    pub(super) visible: bool,
}

impl WebViewHandle {
    /// Get the pane ID.
    pub fn pane_id(&self) -> u32 {
        self.pane_id
    }

    pub fn role(&self) -> WebViewRole {
        self.role
    }

    /// Get the current URL.
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Get the current title.
    pub fn current_title(&self) -> &str {
        &self.current_title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Navigate to a URL.
    pub fn load_url(&mut self, url: &str) -> Result<(), wry::Error> {
        self.webview.load_url(url)?;
        self.current_url = url.to_string();
        Ok(())
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Set the WebView bounds (position + size) within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    /// Show or hide the WebView.
    pub fn set_visible(&mut self, visible: bool) -> Result<(), wry::Error> {
        if self.visible == visible {
            return Ok(());
        }
        self.webview.set_visible(visible)?;
        self.visible = visible;
        Ok(())
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Return focus to the parent window.
    pub fn focus_parent(&self) -> Result<(), wry::Error> {
        self.webview.focus_parent()
    }

    /// Update the tracked URL after the page navigated on its own.
    pub fn set_current_url(&mut self, url: String) {
        self.current_url = url;
    }

    /// Update the tracked title.
    pub fn set_title(&mut self, title: String) {
        self.current_title = title;
    }
}
