//! Core types and constructors for FullscreenMachine.

use tracing::debug;

use crate::bridge::{presentation_stylesheet, EventBridge, HostNotifier};
use crate::dom::{Document, Element};
use crate::options::ShimOptions;
use crate::overrides::{OverrideStyle, ScrollLock};
use crate::style::SnapshotStore;

/// The active fake-fullscreen session. Existence of a session is what
/// "active" means; there is no separate flag to keep in sync.
#[derive(Debug)]
pub struct FullscreenSession<E: Element> {
    pub(super) target: E,
    /// `None` when the document had no body to lock at enter time.
    pub(super) scroll_lock: Option<ScrollLock>,
}

impl<E: Element> FullscreenSession<E> {
    pub fn target(&self) -> &E {
        &self.target
    }

    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_some()
    }
}

/// Borrowed view of the machine state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenState<'a, E> {
    Idle,
    Active(&'a E),
}

/// What a request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Entered,
    Exited,
    /// Redundant request: enter while active or exit while idle.
    Ignored,
}

/// Fake-fullscreen controller for one pane's document.
pub struct FullscreenMachine<D: Document> {
    pub(super) document: D,
    pub(super) options: ShimOptions,
    pub(super) overrides: OverrideStyle,
    pub(super) session: Option<FullscreenSession<D::Element>>,
    pub(super) snapshots: SnapshotStore<D::Element>,
    pub(super) bridge: EventBridge,
}

impl<D: Document> FullscreenMachine<D> {
    /// Wire the machine to `document` and inject the presentation rules.
    ///
    /// Invalid option fields fall back to their defaults.
    pub fn install(document: D, options: ShimOptions) -> Self {
        let options = options.sanitized();
        document.inject_stylesheet(&presentation_stylesheet(&options));
        debug!(attribute = %options.indicator_attribute, "fullscreen shim installed");

        Self {
            overrides: OverrideStyle::from_options(&options),
            document,
            options,
            session: None,
            snapshots: SnapshotStore::new(),
            bridge: EventBridge::default(),
        }
    }

    /// Attach the host notification hook.
    pub fn with_notifier(mut self, notifier: Box<dyn HostNotifier>) -> Self {
        self.bridge.set_notifier(notifier);
        self
    }

    // -- Accessors --

    pub fn state(&self) -> FullscreenState<'_, D::Element> {
        match &self.session {
            Some(session) => FullscreenState::Active(&session.target),
            None => FullscreenState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// The element currently in fake fullscreen, if any.
    pub fn current_target(&self) -> Option<&D::Element> {
        self.session.as_ref().map(|s| &s.target)
    }

    pub fn session(&self) -> Option<&FullscreenSession<D::Element>> {
        self.session.as_ref()
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn options(&self) -> &ShimOptions {
        &self.options
    }

    /// Number of snapshots held; zero whenever the machine is idle.
    pub fn snapshot_count(&self) -> usize {
        self.snapshots.len()
    }
}

impl<D: Document + std::fmt::Debug> std::fmt::Debug for FullscreenMachine<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullscreenMachine")
            .field("document", &self.document)
            .field("session", &self.session)
            .field("bridge", &self.bridge)
            .finish_non_exhaustive()
    }
}
