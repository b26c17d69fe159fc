use std::time::Duration;

use gridsnap_common::Millis;
use serde::{Deserialize, Serialize};

/// Tunables for the debounce / snap decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapSettings {
    /// Quiet period after the last notification before an axis is snapped.
    /// Also the length of the guard after a programmatic move/resize.
    pub debounce: Duration,
    /// Largest difference between live and snapped values that is left alone.
    pub snap_tolerance: f64,
    /// How close to the viewport size a resize must be to count as fullscreen.
    pub fullscreen_tolerance: f64,
    /// Space kept free around a window when it is reflowed.
    pub reflow_margin: f64,
}

impl Default for SnapSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(200),
            snap_tolerance: 1.0,
            fullscreen_tolerance: 10.0,
            reflow_margin: 20.0,
        }
    }
}

/// Where and how big newly opened windows are.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementDefaults {
    pub width: f64,
    pub height: f64,
    pub origin: f64,
    pub cascade_step: f64,
}

impl Default for PlacementDefaults {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
            origin: 10.0,
            cascade_step: 20.0,
        }
    }
}

impl PlacementDefaults {
    /// Cascaded top-left corner for the `index`-th window.
    pub fn origin_for(&self, index: usize) -> (f64, f64) {
        let offset = self.origin + index as f64 * self.cascade_step;
        (offset, offset)
    }
}

/// The two independently debounced aspects of a window's geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Axis {
    Position,
    Dimension,
}

/// Where one axis of one window is in the debounce cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisPhase {
    /// Nothing has happened on this axis yet.
    Idle,
    /// A notification arrived; the axis is evaluated at `due` unless another
    /// notification supersedes it first.
    PendingDebounce { due: Millis },
    /// The controller just moved/resized the window itself. Notifications
    /// arriving before `until` are echoes and are ignored.
    Snapping { until: Millis },
    /// Evaluated and left as is (or the guard has expired).
    Settled,
}
