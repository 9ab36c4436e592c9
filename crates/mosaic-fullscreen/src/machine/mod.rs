//! The FullscreenMachine owns the single fake-fullscreen session of a pane
//! and drives enter/exit through the snapshot store, override style and
//! event bridge.

mod input;
mod transitions;
mod types;

pub use input::{InputOutcome, KeyEvent, PointerEvent};
pub use types::*;

#[cfg(test)]
mod tests;
