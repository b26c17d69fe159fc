//! gridsnap configuration system.
//!
//! TOML-based configuration for the grid dimensions, snap timing and
//! tolerances, new-window placement and logging. All sections use defaults
//! so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use gridsnap_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{GridsnapConfig, CONFIG_SCHEMA_VERSION};

use gridsnap_common::ConfigError;
use std::path::Path;

/// Load config from `path` if given, otherwise from the platform default path
/// (creating a commented default file on first run).
pub fn load_config(path: Option<&Path>) -> Result<GridsnapConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &GridsnapConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
