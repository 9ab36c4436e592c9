//! Core types and constructors for TilingManager.

use crate::layout::LayoutEngine;
use crate::pane::Pane;

/// Manages the panel grid: the ordered pane registry, focus tracking and
/// the pane currently expanded to fill the window.
#[derive(Debug)]
pub struct TilingManager {
    /// Panes in display order.
    pub(super) panes: Vec<Pane>,
    /// The currently focused pane ID, if any pane exists.
    pub(super) focused: Option<u32>,
    /// If `Some(id)`, that pane is fullscreen inside the window.
    pub(super) fullscreen: Option<u32>,
    /// Layout engine configuration.
    pub(super) layout_engine: LayoutEngine,
    /// Auto-incrementing counter for pane IDs.
    pub(super) next_id: u32,
}

impl TilingManager {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            panes: Vec::new(),
            focused: None,
            fullscreen: None,
            layout_engine: LayoutEngine::default(),
            next_id: 1,
        }
    }

    /// Create with a custom layout engine.
    pub fn with_layout(layout_engine: LayoutEngine) -> Self {
        let mut mgr = Self::new();
        mgr.layout_engine = layout_engine;
        mgr
    }

    // -- Accessors --

    pub fn focused_id(&self) -> Option<u32> {
        self.focused
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.is_some()
    }

    pub fn fullscreen_id(&self) -> Option<u32> {
        self.fullscreen
    }

    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    pub fn panes(&self) -> &[Pane] {
        &self.panes
    }

    pub fn pane(&self, id: u32) -> Option<&Pane> {
        self.panes.iter().find(|p| p.id.0 == id)
    }

    pub fn pane_mut(&mut self, id: u32) -> Option<&mut Pane> {
        self.panes.iter_mut().find(|p| p.id.0 == id)
    }

    /// Pane IDs in display order.
    pub fn ordered_pane_ids(&self) -> Vec<u32> {
        self.panes.iter().map(|p| p.id.0).collect()
    }

    pub fn gap(&self) -> u32 {
        self.layout_engine.gap
    }

    /// Update the gap between panes (called when settings change).
    pub fn set_gap(&mut self, gap: u32) {
        self.layout_engine.gap = gap;
    }

    pub fn outer_padding(&self) -> u32 {
        self.layout_engine.outer_padding
    }

    /// Update the outer padding around the grid.
    pub fn set_outer_padding(&mut self, padding: u32) {
        self.layout_engine.outer_padding = padding;
    }

    pub(super) fn position(&self, id: u32) -> Option<usize> {
        self.panes.iter().position(|p| p.id.0 == id)
    }
}

impl Default for TilingManager {
    fn default() -> Self {
        Self::new()
    }
}
