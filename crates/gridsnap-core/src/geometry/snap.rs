//! Nearest-grid-line snapping, one axis at a time.
//!
//! All rounding goes through [`f64::round`] (half away from zero).

use gridsnap_common::Rect;

use super::CellSize;

fn nearest_line(value: f64, cell: f64) -> f64 {
    (value / cell).round() * cell
}

/// Pick the near-edge line or the far-edge line minus `extent`, whichever
/// moves the near edge less. Ties keep the near edge.
fn snap_axis(near: f64, extent: f64, cell: f64) -> f64 {
    let far = near + extent;
    let near_line = nearest_line(near, cell);
    let far_line = nearest_line(far, cell);
    let near_dist = (near - near_line).abs();
    let far_dist = (far - far_line).abs();
    if near_dist <= far_dist {
        near_line
    } else {
        far_line - extent
    }
}

/// Snap width and height independently to the nearest multiple of the cell size.
pub fn snap_dimension(width: f64, height: f64, cell_width: f64, cell_height: f64) -> (f64, f64) {
    (
        nearest_line(width, cell_width),
        nearest_line(height, cell_height),
    )
}

/// Snap the top-left corner so that either the near or the far edge of the
/// rectangle sits on a grid line, per axis.
pub fn snap_position(
    left: f64,
    top: f64,
    width: f64,
    height: f64,
    cell_width: f64,
    cell_height: f64,
) -> (f64, f64) {
    (
        snap_axis(left, width, cell_width),
        snap_axis(top, height, cell_height),
    )
}

/// Snap size first, then position using the snapped size.
pub fn snap_rect(rect: Rect, cell: CellSize) -> Rect {
    let (width, height) =
        snap_dimension(rect.width, rect.height, cell.cell_width, cell.cell_height);
    let (x, y) = snap_position(
        rect.x,
        rect.y,
        width,
        height,
        cell.cell_width,
        cell.cell_height,
    );
    Rect {
        x,
        y,
        width,
        height,
    }
}
