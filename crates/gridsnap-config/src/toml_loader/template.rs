//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# gridsnap configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[grid]
# columns = 40             # 1-1000
# rows = 32                # 1-1000

[snap]
# debounce_ms = 200        # 0-5000, also the echo guard after a snap
# snap_tolerance = 1.0     # 0.0-50.0
# fullscreen_tolerance = 10.0  # 0.0-200.0
# reflow_margin = 20.0     # 0.0-200.0

[windows]
# default_width = 400.0    # 50-10000
# default_height = 300.0   # 50-10000
# origin = 10.0
# cascade_step = 20.0

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
