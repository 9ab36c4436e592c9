//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Coordinates config, the panel grid, the chrome page and the
//! content webviews.

mod core;
mod event_handler;
mod fullscreen;
mod init;
mod panels;
mod polling;
mod shutdown;
mod title;
mod types;
mod webview_bridge;

pub use core::MosaicApp;
