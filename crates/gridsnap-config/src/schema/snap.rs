//! Snap controller timing and tolerance settings.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Controls how eagerly windows are pulled onto grid lines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Quiet period after the last move/resize notification before snapping,
    /// also used as the echo guard after a programmatic snap (valid range: 0-5000).
    pub debounce_ms: u32,
    /// Differences at or below this many units are left alone (valid range: 0.0-50.0).
    pub snap_tolerance: f64,
    /// A window within this distance of the viewport size on both axes is
    /// treated as full screen and never dimension-snapped (valid range: 0.0-200.0).
    pub fullscreen_tolerance: f64,
    /// Space kept free on the right/bottom when windows are reflowed after a
    /// viewport change (valid range: 0.0-200.0).
    pub reflow_margin: f64,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            snap_tolerance: 1.0,
            fullscreen_tolerance: 10.0,
            reflow_margin: 20.0,
        }
    }
}

impl SnapConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(u64::from(self.debounce_ms))
    }
}
