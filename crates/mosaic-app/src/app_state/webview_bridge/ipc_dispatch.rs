//! IPC message validation and dispatch from webview to Rust handlers.

use mosaic_webview::ipc::FULLSCREEN_CHANGE_KIND;
use mosaic_webview::manager::CHROME_WEBVIEW_ID;
use mosaic_webview::{IpcMessage, IpcPayload, WebViewRole};

use crate::app_state::core::MosaicApp;

// =============================================================================
// IPC ALLOWLIST
// =============================================================================

/// Kinds only the chrome page may send.
const CHROME_IPC_KINDS: &[&str] = &[
    "chrome_ready",
    "panel_add",
    "panel_close",
    "panel_navigate",
    "panel_focus",
];

/// Kinds only content panels may send.
const CONTENT_IPC_KINDS: &[&str] = &[FULLSCREEN_CHANGE_KIND];

/// Check whether an IPC message kind is known at all.
pub fn is_ipc_kind_allowed(kind: &str) -> bool {
    CHROME_IPC_KINDS.contains(&kind) || CONTENT_IPC_KINDS.contains(&kind)
}

/// Check whether a webview of `role` may send `kind`. Content pages run
/// arbitrary site scripts and must not drive the grid.
pub fn is_kind_allowed_from(role: WebViewRole, kind: &str) -> bool {
    match role {
        WebViewRole::Chrome => CHROME_IPC_KINDS.contains(&kind),
        WebViewRole::Content => CONTENT_IPC_KINDS.contains(&kind),
    }
}

fn role_of(pane_id: u32) -> WebViewRole {
    if pane_id == CHROME_WEBVIEW_ID {
        WebViewRole::Chrome
    } else {
        WebViewRole::Content
    }
}

// =============================================================================
// PAYLOAD HELPERS
// =============================================================================

fn payload_field<'a>(payload: &'a IpcPayload, key: &str) -> Option<&'a serde_json::Value> {
    payload.as_json().and_then(|v| v.get(key))
}

/// `{"id": n}` as a pane ID.
fn payload_id(payload: &IpcPayload) -> Option<u32> {
    payload_field(payload, "id")
        .and_then(|v| v.as_u64())
        .and_then(|id| u32::try_from(id).ok())
}

fn payload_str<'a>(payload: &'a IpcPayload, key: &str) -> Option<&'a str> {
    payload_field(payload, key).and_then(|v| v.as_str())
}

fn payload_bool(payload: &IpcPayload, key: &str) -> Option<bool> {
    payload_field(payload, key).and_then(|v| v.as_bool())
}

// =============================================================================
// DISPATCH
// =============================================================================

impl MosaicApp {
    /// Handle a single IPC message from a webview.
    pub(in crate::app_state) fn handle_ipc_message(&mut self, pane_id: u32, body: &str) {
        let msg = match IpcMessage::from_json(body) {
            Some(m) => m,
            None => {
                tracing::warn!(
                    pane_id,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return;
            }
        };

        if !is_ipc_kind_allowed(&msg.kind) {
            tracing::warn!(pane_id, kind = %msg.kind, "IPC message rejected: unknown kind");
            return;
        }

        let role = role_of(pane_id);
        if !is_kind_allowed_from(role, &msg.kind) {
            tracing::warn!(
                pane_id,
                ?role,
                kind = %msg.kind,
                "IPC message rejected: wrong sender"
            );
            return;
        }

        tracing::debug!(pane_id, kind = %msg.kind, "IPC message dispatched");

        match msg.kind.as_str() {
            "chrome_ready" => {
                self.chrome_ready = true;
                self.sync_chrome();
            }
            "panel_add" => {
                self.open_panel(payload_str(&msg.payload, "url"));
            }
            "panel_close" => match payload_id(&msg.payload) {
                Some(id) => {
                    self.close_panel(id);
                }
                None => tracing::warn!(kind = %msg.kind, "IPC payload missing pane id"),
            },
            "panel_navigate" => {
                match (payload_id(&msg.payload), payload_str(&msg.payload, "url")) {
                    (Some(id), Some(url)) => {
                        self.navigate_panel(id, url);
                    }
                    _ => tracing::warn!(kind = %msg.kind, "IPC payload missing id or url"),
                }
            }
            "panel_focus" => match payload_id(&msg.payload) {
                Some(id) => {
                    self.focus_panel(id);
                }
                None => tracing::warn!(kind = %msg.kind, "IPC payload missing pane id"),
            },
            FULLSCREEN_CHANGE_KIND => match payload_bool(&msg.payload, "active") {
                Some(active) => self.handle_fullscreen_change(pane_id, active),
                None => tracing::warn!(pane_id, "fullscreen_change without active flag"),
            },
            _ => {
                tracing::warn!(pane_id, kind = %msg.kind, "Unhandled IPC kind");
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
