//! Layout calculation: pane count to grid cells.

use mosaic_common::Rect;

use super::LayoutEngine;

/// Columns used once there is more than one pane.
const COLUMNS: usize = 2;

impl LayoutEngine {
    /// Place `ids` (in display order) inside `bounds`.
    ///
    /// One pane fills the area, two sit side by side, three put the
    /// first pane in a full-height left column, and four or more fill a
    /// two-column grid row by row.
    pub fn compute(&self, ids: &[u32], bounds: Rect) -> Vec<(u32, Rect)> {
        let area = bounds.inset(self.outer_padding as f64);
        match ids {
            [] => Vec::new(),
            [only] => vec![(*only, area)],
            [first, second] => {
                let cols = self.split(area.x, area.width, 2);
                vec![
                    (*first, Rect::new(cols[0].0, area.y, cols[0].1, area.height)),
                    (*second, Rect::new(cols[1].0, area.y, cols[1].1, area.height)),
                ]
            }
            [first, second, third] => {
                let cols = self.split(area.x, area.width, 2);
                let rows = self.split(area.y, area.height, 2);
                vec![
                    (*first, Rect::new(cols[0].0, area.y, cols[0].1, area.height)),
                    (*second, Rect::new(cols[1].0, rows[0].0, cols[1].1, rows[0].1)),
                    (*third, Rect::new(cols[1].0, rows[1].0, cols[1].1, rows[1].1)),
                ]
            }
            _ => {
                let row_count = ids.len().div_ceil(COLUMNS);
                let cols = self.split(area.x, area.width, COLUMNS);
                let rows = self.split(area.y, area.height, row_count);
                ids.iter()
                    .enumerate()
                    .map(|(i, id)| {
                        let (x, w) = cols[i % COLUMNS];
                        let (y, h) = rows[i / COLUMNS];
                        (*id, Rect::new(x, y, w, h))
                    })
                    .collect()
            }
        }
    }

    /// Divide `length` starting at `start` into `count` equal tracks
    /// separated by the gap. Returns `(offset, size)` per track.
    fn split(&self, start: f64, length: f64, count: usize) -> Vec<(f64, f64)> {
        let gap = self.gap as f64;
        let available = (length - gap * (count as f64 - 1.0)).max(0.0);
        let size = available / count as f64;
        (0..count)
            .map(|i| (start + i as f64 * (size + gap), size))
            .collect()
    }
}
