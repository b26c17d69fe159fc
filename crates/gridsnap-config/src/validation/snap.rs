//! Snap timing/tolerance and new-window placement validation.

use crate::schema::GridsnapConfig;

use super::check_range;

pub(crate) fn validate_snap(errors: &mut Vec<String>, config: &GridsnapConfig) {
    let snap = &config.snap;
    check_range(errors, "snap.debounce_ms", snap.debounce_ms, 0..=5000);
    check_range(errors, "snap.snap_tolerance", snap.snap_tolerance, 0.0..=50.0);
    check_range(
        errors,
        "snap.fullscreen_tolerance",
        snap.fullscreen_tolerance,
        0.0..=200.0,
    );
    check_range(errors, "snap.reflow_margin", snap.reflow_margin, 0.0..=200.0);
}

pub(crate) fn validate_windows(errors: &mut Vec<String>, config: &GridsnapConfig) {
    let windows = &config.windows;
    check_range(
        errors,
        "windows.default_width",
        windows.default_width,
        50.0..=10000.0,
    );
    check_range(
        errors,
        "windows.default_height",
        windows.default_height,
        50.0..=10000.0,
    );
    check_range(errors, "windows.origin", windows.origin, 0.0..=10000.0);
    check_range(errors, "windows.cascade_step", windows.cascade_step, 0.0..=1000.0);
}
