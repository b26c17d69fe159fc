//! Configuration schema types for gridsnap.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the page ships with.

mod grid;
mod snap;
mod system;
mod windows;

pub use grid::*;
pub use snap::*;
pub use system::*;
pub use windows::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for gridsnap.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GridsnapConfig {
    pub grid: GridSection,
    pub snap: SnapConfig,
    pub windows: WindowDefaults,
    pub logging: LoggingConfig,
}
