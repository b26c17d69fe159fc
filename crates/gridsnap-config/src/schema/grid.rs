//! Grid overlay dimensions.

use gridsnap_common::{ConfigError, GridConfig};
use serde::{Deserialize, Serialize};

/// Column and row counts of the grid drawn over the viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    /// Number of columns (valid range: 1-1000).
    pub columns: u32,
    /// Number of rows (valid range: 1-1000).
    pub rows: u32,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            columns: GridConfig::DEFAULT_COLUMNS,
            rows: GridConfig::DEFAULT_ROWS,
        }
    }
}

impl GridSection {
    /// Convert to the checked grid type used by the geometry engine.
    pub fn to_grid(&self) -> Result<GridConfig, ConfigError> {
        GridConfig::new(self.columns, self.rows)
    }
}
