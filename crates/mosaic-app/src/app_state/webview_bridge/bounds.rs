//! Coordinate conversion between grid rects and wry rects, and the split
//! of each grid cell into URL bar and content area.

use mosaic_common::types::Rect;
use mosaic_tiling::TilingManager;

/// Heights of the chrome page's own strips.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeMetrics {
    /// Toolbar across the top of the window.
    pub toolbar_height: f64,
    /// URL bar at the top of each panel cell.
    pub url_bar_height: f64,
}

/// Where one panel sits in the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    pub pane_id: u32,
    /// Whole grid cell; the chrome page draws the URL bar at its top.
    pub cell: Rect,
    /// Area covered by the panel's content webview.
    pub content: Rect,
}

/// Convert a grid `Rect` (f64 logical coords) to a wry `Rect`.
pub fn tiling_rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

/// The part of the window below the toolbar.
pub fn grid_viewport(window: Rect, metrics: ChromeMetrics) -> Rect {
    let toolbar = metrics.toolbar_height.min(window.height);
    Rect::new(
        window.x,
        window.y + toolbar,
        window.width,
        window.height - toolbar,
    )
}

/// A cell minus its URL bar.
pub fn content_rect(cell: Rect, url_bar_height: f64) -> Rect {
    let bar = url_bar_height.min(cell.height);
    Rect::new(cell.x, cell.y + bar, cell.width, cell.height - bar)
}

/// Frames for every laid-out panel.
///
/// An expanded panel covers the whole window, toolbar and URL bar
/// included, and is the only frame.
pub fn panel_frames(tiling: &TilingManager, window: Rect, metrics: ChromeMetrics) -> Vec<PanelFrame> {
    if let Some(pane_id) = tiling.fullscreen_id() {
        return vec![PanelFrame {
            pane_id,
            cell: window,
            content: window,
        }];
    }

    tiling
        .compute_layout(grid_viewport(window, metrics))
        .into_iter()
        .map(|(pane_id, cell)| PanelFrame {
            pane_id,
            cell,
            content: content_rect(cell, metrics.url_bar_height),
        })
        .collect()
}
