//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod grid;
mod snap;


use crate::schema::GridsnapConfig;
use gridsnap_common::ConfigError;
use std::fmt::Display;
use std::ops::RangeInclusive;

/// Push an error unless `value` lies in `range`. NaN never does.
pub(crate) fn check_range<T>(errors: &mut Vec<String>, name: &str, value: T, range: RangeInclusive<T>)
where
    T: PartialOrd + Display,
{
    if !range.contains(&value) {
        errors.push(format!(
            "{name} = {value} is out of range [{}, {}]",
            range.start(),
            range.end()
        ));
    }
}

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &GridsnapConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    grid::validate_grid(&mut errors, config);
    snap::validate_snap(&mut errors, config);
    snap::validate_windows(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
