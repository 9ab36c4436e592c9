//! WebView bridge for the Mosaic panel grid.
//!
//! Wraps the `wry` crate to provide:
//! - Managed WebView instances for the chrome page and each content panel
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - Custom `mosaic://` protocol for serving bundled content
//! - URL normalization and per-role navigation policy
//! - Event handling (page load, title change, navigation, popups)

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;
pub mod navigation;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::{IpcMessage, IpcPayload};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager, WebViewRegistry, WebViewRole};
pub use navigation::normalize_url;
