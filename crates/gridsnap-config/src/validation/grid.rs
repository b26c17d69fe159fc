//! Grid dimension validation.

use crate::schema::GridsnapConfig;

use super::check_range;

/// Columns and rows must be at least 1; zero would make cell size undefined.
pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &GridsnapConfig) {
    check_range(errors, "grid.columns", config.grid.columns, 1..=1000);
    check_range(errors, "grid.rows", config.grid.rows, 1..=1000);
}
