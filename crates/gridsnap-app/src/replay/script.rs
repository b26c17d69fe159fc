//! Replay script format.
//!
//! ```json
//! { "steps": [
//!     { "at_ms": 0,   "type": "open",   "id": "w1", "url": "example.com" },
//!     { "at_ms": 50,  "type": "move",   "id": "w1", "x": 12, "y": 95 },
//!     { "at_ms": 400, "type": "viewport", "width": 800, "height": 480 }
//! ] }
//! ```

use std::path::Path;

use gridsnap_common::{GridsnapError, Result};
use serde::{Deserialize, Serialize};

/// One user action or environment change at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    Open {
        url: String,
        #[serde(default)]
        id: Option<String>,
    },
    Move {
        id: String,
        x: f64,
        y: f64,
    },
    Resize {
        id: String,
        width: f64,
        height: f64,
    },
    Minimize {
        id: String,
    },
    Maximize {
        id: String,
    },
    Restore {
        id: String,
    },
    ResetSize {
        id: String,
    },
    Close {
        id: String,
    },
    Viewport {
        width: f64,
        height: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Milliseconds since the start of the replay.
    pub at_ms: u64,
    #[serde(flatten)]
    pub action: Action,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self> {
        let mut script: Script = serde_json::from_str(json)
            .map_err(|e| GridsnapError::Other(format!("invalid replay script: {e}")))?;
        // Stable, so steps sharing a timestamp keep file order.
        script.steps.sort_by_key(|step| step.at_ms);
        Ok(script)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}
