//! The TilingManager coordinates panes, focus, and in-window fullscreen.

mod focus;
mod layout_compute;
mod operations;
mod types;

pub use types::*;
