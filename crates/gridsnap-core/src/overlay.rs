//! Background grid lines drawn behind the windows.

use crate::geometry::CellSize;

const LINE_COLOR: &str = "rgba(0,0,0,0.15)";

/// CSS background declarations that draw one 1px line per cell boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct GridOverlay {
    pub background_image: String,
    pub background_size: String,
    pub background_position: &'static str,
}

impl GridOverlay {
    pub fn for_cell(cell: CellSize) -> Self {
        Self {
            background_image: format!(
                "linear-gradient(to right, {LINE_COLOR} 1px, transparent 1px), \
                 linear-gradient(to bottom, {LINE_COLOR} 1px, transparent 1px)"
            ),
            background_size: format!("{}px {}px", cell.cell_width, cell.cell_height),
            background_position: "0 0",
        }
    }

    /// Render as inline style declarations.
    pub fn css(&self) -> String {
        format!(
            "background-image: {}; background-size: {}; background-position: {};",
            self.background_image, self.background_size, self.background_position
        )
    }
}
