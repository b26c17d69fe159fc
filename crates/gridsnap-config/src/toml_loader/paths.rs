//! Where the config file lives, and writing the first one.

use gridsnap_common::ConfigError;
use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::template::default_config_toml;

/// Environment variable naming a config file to use instead of the
/// platform default.
pub const CONFIG_ENV_VAR: &str = "GRIDSNAP_CONFIG";

/// Resolve the config path: `$GRIDSNAP_CONFIG` if set and non-empty,
/// otherwise `<config dir>/gridsnap/config.toml`.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    resolve_config_path(std::env::var_os(CONFIG_ENV_VAR), dirs::config_dir())
}

pub(crate) fn resolve_config_path(
    env_override: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> Result<PathBuf, ConfigError> {
    if let Some(path) = env_override.filter(|p| !p.is_empty()) {
        let path = PathBuf::from(path);
        debug!("{CONFIG_ENV_VAR} points at {}", path.display());
        return Ok(path);
    }
    let config_dir = config_dir.ok_or_else(|| {
        ConfigError::ParseError(format!(
            "could not determine config directory; set {CONFIG_ENV_VAR} to choose a file"
        ))
    })?;
    Ok(config_dir.join("gridsnap").join("config.toml"))
}

/// Write the commented default config to `path`.
///
/// An existing file is left untouched, so a config written by another
/// process after the first load attempt is never replaced.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            debug!("config already exists at {}, not overwriting", path.display());
            return Ok(());
        }
        Err(e) => {
            return Err(ConfigError::ParseError(format!(
                "failed to create default config at {}: {e}",
                path.display()
            )))
        }
    };
    file.write_all(default_config_toml().as_bytes()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}
