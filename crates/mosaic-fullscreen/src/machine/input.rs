//! Escape-key and outside-click exit triggers.

use mosaic_common::Point;
use tracing::debug;

use crate::dom::{Document, Element};

use super::{FullscreenMachine, Transition};

/// A keydown seen in the capture phase, before page handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    key: String,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// A click, with the element it hit when known.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent<E> {
    pub position: Point,
    pub target: Option<E>,
}

impl<E> PointerEvent<E> {
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: None,
        }
    }

    pub fn on(target: E, x: f64, y: f64) -> Self {
        Self {
            position: Point::new(x, y),
            target: Some(target),
        }
    }
}

/// Whether the shim acted on an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// The event caused an exit.
    Consumed,
    Ignored,
}

impl<D: Document> FullscreenMachine<D> {
    /// Escape while active exits and keeps the key from reaching the page.
    pub fn handle_key(&mut self, event: &mut KeyEvent) -> InputOutcome {
        if !self.options.exit_on_escape || event.key() != "Escape" || !self.is_active() {
            return InputOutcome::Ignored;
        }

        event.prevent_default();
        event.stop_propagation();
        debug!("escape pressed while fullscreen");
        self.exit_from_input()
    }

    /// A click outside the active element exits.
    ///
    /// Hit elements are checked by containment; events without one fall
    /// back to the element's bounds.
    pub fn handle_pointer(&mut self, event: &PointerEvent<D::Element>) -> InputOutcome {
        if !self.options.exit_on_outside_click {
            return InputOutcome::Ignored;
        }
        let Some(active) = self.current_target() else {
            return InputOutcome::Ignored;
        };

        let inside = match &event.target {
            Some(hit) => active.contains(hit),
            None => active.bounds().contains(event.position),
        };
        if inside {
            return InputOutcome::Ignored;
        }

        debug!(x = event.position.x, y = event.position.y, "click outside fullscreen element");
        self.exit_from_input()
    }

    fn exit_from_input(&mut self) -> InputOutcome {
        match self.request_exit() {
            Transition::Exited => InputOutcome::Consumed,
            _ => InputOutcome::Ignored,
        }
    }
}
