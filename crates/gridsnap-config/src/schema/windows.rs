//! Placement defaults for newly opened windows.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowDefaults {
    /// Width of a new window in pixels (valid range: 50-10000).
    pub default_width: f64,
    /// Height of a new window in pixels (valid range: 50-10000).
    pub default_height: f64,
    /// Offset of the first window from the top-left corner.
    pub origin: f64,
    /// Extra offset applied per already-open window so new windows cascade.
    pub cascade_step: f64,
}

impl Default for WindowDefaults {
    fn default() -> Self {
        Self {
            default_width: 400.0,
            default_height: 300.0,
            origin: 10.0,
            cascade_step: 20.0,
        }
    }
}
