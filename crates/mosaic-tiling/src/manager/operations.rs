//! Add, close, and navigate operations on the TilingManager.

use mosaic_common::PaneId;

use crate::pane::Pane;

use super::TilingManager;

impl TilingManager {
    /// Append a pane showing `url` and focus it. Returns the new ID.
    pub fn add_pane(&mut self, url: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.panes.push(Pane::new(PaneId(id), url));
        self.focused = Some(id);
        id
    }

    /// Close a specific pane by ID. Closing the last pane leaves the grid
    /// empty.
    pub fn close_pane(&mut self, id: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.panes.remove(index);

        if self.fullscreen == Some(id) {
            self.fullscreen = None;
        }
        if self.focused == Some(id) {
            // Prefer the pane that slid into the closed slot.
            self.focused = self
                .panes
                .get(index)
                .or_else(|| self.panes.last())
                .map(|p| p.id.0);
        }
        true
    }

    /// Close the focused pane.
    pub fn close_focused(&mut self) -> bool {
        match self.focused {
            Some(id) => self.close_pane(id),
            None => false,
        }
    }

    /// Record the address a pane is showing.
    pub fn set_url(&mut self, id: u32, url: impl Into<String>) -> bool {
        match self.pane_mut(id) {
            Some(pane) => {
                pane.url = url.into();
                true
            }
            None => false,
        }
    }

    /// Record the page title a pane reported.
    pub fn set_title(&mut self, id: u32, title: impl Into<String>) -> bool {
        match self.pane_mut(id) {
            Some(pane) => {
                pane.title = title.into();
                true
            }
            None => false,
        }
    }
}
