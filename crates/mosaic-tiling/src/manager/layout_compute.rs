//! Layout computation for TilingManager.

use mosaic_common::Rect;

use super::TilingManager;

impl TilingManager {
    /// Compute the layout for all panes within the given viewport.
    /// An expanded pane fills the entire viewport and is the only entry.
    pub fn compute_layout(&self, viewport: Rect) -> Vec<(u32, Rect)> {
        if let Some(expanded) = self.fullscreen {
            vec![(expanded, viewport)]
        } else {
            self.layout_engine
                .compute(&self.ordered_pane_ids(), viewport)
        }
    }
}
