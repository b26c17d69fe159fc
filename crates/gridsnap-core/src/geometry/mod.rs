//! Grid geometry: cell size from viewport + grid, and per-axis snapping.
//!
//! Everything here is pure arithmetic with no dependency on window state,
//! persistence or the window host.

mod cell;
mod reflow;
mod snap;

pub use cell::*;
pub use reflow::*;
pub use snap::*;
