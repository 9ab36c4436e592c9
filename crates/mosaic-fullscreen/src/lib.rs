//! In-pane fullscreen emulation for Mosaic panels.
//!
//! Web content calls the Fullscreen API expecting the OS window to go
//! fullscreen. Inside a multi-pane host that is never what we want, so
//! this crate re-implements the API as a "fake" fullscreen that expands
//! the requesting element to fill its own pane:
//! - Style snapshots so the element can be put back exactly as it was
//! - A two-state machine (`Idle` / `Active`) owning the single session
//! - A capability trait plus legacy alias tables for every entry point
//! - Change-event fan-out, Escape / outside-click exit, and a best-effort
//!   notification hook towards the host application
//!
//! The machine is generic over the [`dom::Document`] trait. Live webview
//! pages get the same behavior through [`script::render_shim_script`],
//! which generates the injected JavaScript from the tables in this crate.

pub mod api;
pub mod bridge;
pub mod dom;
pub mod errors;
pub mod machine;
pub mod options;
pub mod overrides;
pub mod sanitize;
pub mod script;
pub mod style;

#[cfg(test)]
pub(crate) mod test_dom;

pub use api::{invoke_entry_point, Completion, EntryPoint, EntryPointResult, FullscreenApi};
pub use bridge::{FullscreenChange, HostNotifier, CHANGE_EVENT_NAMES, HOST_HOOK_NAME};
pub use dom::{Document, Element, Priority, StyleProperty};
pub use errors::{NotifyError, ShimError};
pub use machine::{
    FullscreenMachine, FullscreenSession, FullscreenState, InputOutcome, KeyEvent, PointerEvent,
    Transition,
};
pub use options::ShimOptions;
pub use script::render_shim_script;
pub use style::{SnapshotStore, StyleSnapshot};
