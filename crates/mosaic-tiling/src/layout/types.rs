//! Layout engine types and configuration.

/// Spacing used when placing panes in the grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Gap in pixels between panes.
    pub gap: u32,
    /// Outer padding in pixels around the entire grid.
    pub outer_padding: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gap: 8,
            outer_padding: 8,
        }
    }
}
