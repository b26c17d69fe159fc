//! Translate the loaded config into controller settings.

use gridsnap_common::{ConfigError, GridConfig};
use gridsnap_config::schema::{GridSection, SnapConfig, WindowDefaults};
use gridsnap_config::GridsnapConfig;
use gridsnap_core::{PlacementDefaults, SnapSettings};

use crate::cli::GridArgs;

pub fn snap_settings_from_config(config: &SnapConfig) -> SnapSettings {
    SnapSettings {
        debounce: config.debounce(),
        snap_tolerance: config.snap_tolerance,
        fullscreen_tolerance: config.fullscreen_tolerance,
        reflow_margin: config.reflow_margin,
    }
}

pub fn placement_from_config(config: &WindowDefaults) -> PlacementDefaults {
    PlacementDefaults {
        width: config.default_width,
        height: config.default_height,
        origin: config.origin,
        cascade_step: config.cascade_step,
    }
}

/// Grid from the config, with command-line overrides taking precedence.
pub fn grid_from_config(config: &GridSection, overrides: GridArgs) -> Result<GridConfig, ConfigError> {
    GridSection {
        columns: overrides.columns.unwrap_or(config.columns),
        rows: overrides.rows.unwrap_or(config.rows),
    }
    .to_grid()
}

/// Log filter directive: explicit override, else the configured level.
pub fn log_directive(override_level: Option<&str>, config: &GridsnapConfig) -> String {
    match override_level {
        Some(level) => level.to_string(),
        None => format!("gridsnap={}", config.logging.level.as_directive()),
    }
}
