//! IPC (Inter-Process Communication) protocol between Rust and JavaScript.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: JavaScript calls `window.mosaic.ipc.send(kind, payload)`,
//!   which posts `{kind, payload}` to the `ipc_handler` on the WebView.
//! - **Rust -> JS**: Rust evaluates `window.mosaic.ipc._dispatch(...)` in
//!   the WebView, reaching handlers registered with `window.mosaic.ipc.on`.

use mosaic_fullscreen::HOST_HOOK_NAME;
use serde::{Deserialize, Serialize};

/// IPC kind a content panel uses to report its fullscreen state.
pub const FULLSCREEN_CHANGE_KIND: &str = "fullscreen_change";

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// The message type / command name.
    pub kind: String,
    /// The message payload (arbitrary JSON).
    pub payload: IpcPayload,
}

/// Payload of an IPC message: a simple string or structured JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpcPayload {
    Text(String),
    Json(serde_json::Value),
    None,
}

impl IpcPayload {
    /// Borrow the payload as JSON, if it is structured.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            IpcPayload::Json(value) => Some(value),
            _ => None,
        }
    }
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Create a JSON message.
    pub fn json(kind: impl Into<String>, value: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload: IpcPayload::Json(value),
        }
    }
}

/// JavaScript snippet that sets up the IPC bridge on the JS side.
/// Injected as an initialization script into every WebView.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.mosaic = window.mosaic || {};
    if (window.mosaic.ipc) {
        return;
    }
    window.mosaic.ipc = {
        send: function(kind, payload) {
            window.ipc.postMessage(JSON.stringify({
                kind: kind,
                payload: payload === undefined ? null : payload
            }));
        },
        _handlers: {},
        on: function(kind, callback) {
            this._handlers[kind] = callback;
        },
        _dispatch: function(kind, payload) {
            var handler = this._handlers[kind];
            if (handler) {
                handler(payload);
            }
        }
    };
})();
"#;

/// Script that installs the fullscreen host hook on `window.mosaic`.
///
/// The page-side shim calls the hook on every transition; the hook
/// forwards the state to Rust as a `fullscreen_change` message.
pub fn host_hook_script() -> String {
    let hook = serde_json::to_string(HOST_HOOK_NAME).unwrap_or_else(|_| "\"\"".to_string());
    let kind = serde_json::to_string(FULLSCREEN_CHANGE_KIND).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "(function() {{ \
            window.mosaic = window.mosaic || {{}}; \
            window.mosaic[{hook}] = function(active) {{ \
                window.mosaic.ipc.send({kind}, {{ active: !!active }}); \
            }}; \
        }})();"
    )
}

/// Generate a JS snippet that dispatches a message to the JS IPC handler.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.mosaic.ipc._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}
