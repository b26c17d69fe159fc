//! Cell size derivation and pixel <-> grid-unit conversion.

use gridsnap_common::{GridConfig, Rect, Viewport};
use serde::{Deserialize, Serialize};

/// Size of one grid cell. Deliberately unrounded so that snapping an
/// already-snapped value lands on exactly the same line again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub cell_width: f64,
    pub cell_height: f64,
}

/// A rectangle expressed in cell units instead of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Divide the viewport into `grid.columns` x `grid.rows` cells.
pub fn compute_cell_size(viewport: Viewport, grid: GridConfig) -> CellSize {
    CellSize {
        cell_width: viewport.width / f64::from(grid.columns.get()),
        cell_height: viewport.height / f64::from(grid.rows.get()),
    }
}

impl CellSize {
    pub fn to_grid_units(&self, rect: Rect) -> GridRect {
        GridRect {
            x: rect.x / self.cell_width,
            y: rect.y / self.cell_height,
            width: rect.width / self.cell_width,
            height: rect.height / self.cell_height,
        }
    }

    pub fn to_pixels(&self, grid: GridRect) -> Rect {
        Rect {
            x: grid.x * self.cell_width,
            y: grid.y * self.cell_height,
            width: grid.width * self.cell_width,
            height: grid.height * self.cell_height,
        }
    }

    /// Whether both dimensions are finite and positive.
    pub fn is_usable(&self) -> bool {
        self.cell_width.is_finite()
            && self.cell_height.is_finite()
            && self.cell_width > 0.0
            && self.cell_height > 0.0
    }
}
