//! Enter and exit transitions for FullscreenMachine.

use tracing::{debug, info};

use crate::bridge::FullscreenChange;
use crate::dom::{Document, Element};
use crate::overrides::ScrollLock;

use super::{FullscreenMachine, FullscreenSession, Transition};

impl<D: Document> FullscreenMachine<D> {
    /// Put `element` into fake fullscreen.
    ///
    /// Only valid from idle. While a session is active the request is
    /// ignored and the existing target stays.
    pub fn request_enter(&mut self, element: &D::Element) -> Transition {
        if let Some(session) = &self.session {
            debug!(
                requested = ?element,
                active = ?session.target,
                "enter ignored: already fullscreen"
            );
            return Transition::Ignored;
        }

        self.snapshots.save(element);
        self.overrides.apply(element);
        let scroll_lock = self.document.body().map(|body| ScrollLock::engage(&body));

        self.session = Some(FullscreenSession {
            target: element.clone(),
            scroll_lock,
        });
        element.set_attribute(&self.options.indicator_attribute, "true");

        info!(element = ?element, media = element.is_media(), "entered fullscreen");
        self.bridge
            .emit(&self.document, element, FullscreenChange::Entered);
        Transition::Entered
    }

    /// Leave fake fullscreen and put the target back as it was.
    ///
    /// Only valid while active; from idle nothing is touched.
    pub fn request_exit(&mut self) -> Transition {
        let Some(session) = self.session.take() else {
            debug!("exit ignored: not fullscreen");
            return Transition::Ignored;
        };
        let FullscreenSession {
            target,
            scroll_lock,
        } = session;

        match self.snapshots.take(&target) {
            Some(snapshot) => snapshot.restore(&target),
            None => debug!(element = ?target, "no snapshot to restore"),
        }
        if let Some(lock) = scroll_lock {
            match self.document.body() {
                Some(body) => lock.release(&body),
                None => debug!("body gone before scroll lock release"),
            }
        }
        target.remove_attribute(&self.options.indicator_attribute);

        info!(element = ?target, "exited fullscreen");
        self.bridge
            .emit(&self.document, &target, FullscreenChange::Exited);
        Transition::Exited
    }
}
