//! Focus and in-window fullscreen handling for TilingManager.

use tracing::debug;

use super::TilingManager;

impl TilingManager {
    /// Focus the next pane in order, wrapping around.
    pub fn focus_next(&mut self) -> bool {
        self.step_focus(1)
    }

    /// Focus the previous pane in order, wrapping around.
    pub fn focus_prev(&mut self) -> bool {
        self.step_focus(-1)
    }

    /// Set focus to a specific pane by ID.
    pub fn focus_pane(&mut self, id: u32) -> bool {
        if self.position(id).is_some() {
            self.focused = Some(id);
            true
        } else {
            false
        }
    }

    /// Expand `id` to fill the window.
    ///
    /// Refused for unknown panes and while any pane is already expanded.
    pub fn enter_fullscreen(&mut self, id: u32) -> bool {
        if self.position(id).is_none() {
            return false;
        }
        if let Some(current) = self.fullscreen {
            debug!(pane_id = id, current, "fullscreen refused: a pane is already expanded");
            return false;
        }
        self.fullscreen = Some(id);
        self.focused = Some(id);
        true
    }

    /// Return `id` to the grid. Only the expanded pane can leave.
    pub fn exit_fullscreen(&mut self, id: u32) -> bool {
        if self.fullscreen == Some(id) {
            self.fullscreen = None;
            true
        } else {
            false
        }
    }

    fn step_focus(&mut self, step: isize) -> bool {
        let len = self.panes.len();
        if len < 2 {
            return false;
        }
        let current = self
            .focused
            .and_then(|id| self.position(id))
            .unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len as isize) as usize;
        self.focused = Some(self.panes[next].id.0);
        true
    }
}
