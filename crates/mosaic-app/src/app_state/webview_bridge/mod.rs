//! Bridge between the panel grid and the webviews.
//!
//! Handles coordinate conversion, IPC message dispatch, and
//! synchronizing webview bounds to grid cells.

mod bounds;
mod ipc_dispatch;
mod lifecycle;
