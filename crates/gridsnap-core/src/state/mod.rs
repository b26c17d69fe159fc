//! The page-level state container: grid dimensions plus one entry per
//! open window. Owned by the controller; the window host only mirrors it.

mod operations;
mod types;

pub use types::*;
