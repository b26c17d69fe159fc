//! Proportional repositioning after the viewport changes size.

use gridsnap_common::{Rect, Viewport};

use super::{CellSize, GridRect};

/// Turn stored grid units back into pixels for a new viewport, keeping the
/// window on screen.
///
/// Width/height are capped at `viewport - margin`; the position is pulled
/// back so the far edge stays inside the viewport and never goes negative.
pub fn reflow_rect(grid: GridRect, cell: CellSize, viewport: Viewport, margin: f64) -> Rect {
    let target = cell.to_pixels(grid);

    let max_width = (viewport.width - margin).max(0.0);
    let max_height = (viewport.height - margin).max(0.0);
    let width = target.width.min(max_width);
    let height = target.height.min(max_height);

    let mut x = target.x;
    let mut y = target.y;
    if x + width > viewport.width {
        x = viewport.width - width;
    }
    if y + height > viewport.height {
        y = viewport.height - height;
    }

    Rect {
        x: x.max(0.0),
        y: y.max(0.0),
        width,
        height,
    }
}
