use std::path::PathBuf;

use clap::{Parser, Subcommand};
use gridsnap_common::{Rect, Viewport};

/// gridsnap: grid-snapping window controller.
#[derive(Parser, Debug)]
#[command(name = "gridsnap", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a full filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the cell size for a viewport.
    Cells {
        /// Viewport size as WIDTHxHEIGHT.
        #[arg(long, value_parser = parse_viewport)]
        viewport: Viewport,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Snap a rectangle to the grid and print the result.
    Snap {
        /// Viewport size as WIDTHxHEIGHT.
        #[arg(long, value_parser = parse_viewport)]
        viewport: Viewport,

        /// Rectangle as X,Y,WIDTH,HEIGHT.
        #[arg(long, value_parser = parse_rect, allow_hyphen_values = true)]
        rect: Rect,

        #[command(flatten)]
        grid: GridArgs,
    },

    /// Feed a JSON script of window events through the controller and print
    /// the resulting page URL.
    Replay {
        /// Path to the script file.
        script: PathBuf,

        /// Starting viewport size as WIDTHxHEIGHT.
        #[arg(long, value_parser = parse_viewport)]
        viewport: Option<Viewport>,

        /// Page URL to restore state from.
        #[arg(long)]
        state: Option<String>,

        /// Sleep between events instead of replaying instantly.
        #[arg(long)]
        realtime: bool,
    },
}

/// Grid dimension overrides; unset values come from the config.
#[derive(clap::Args, Debug, Default, Clone, Copy)]
pub struct GridArgs {
    #[arg(long)]
    pub columns: Option<u32>,

    #[arg(long)]
    pub rows: Option<u32>,
}

fn parse_dimension(raw: &str, what: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("invalid {what}: {raw:?}"))?;
    if !value.is_finite() {
        return Err(format!("{what} must be finite"));
    }
    Ok(value)
}

/// Parse `1600x960`.
pub fn parse_viewport(raw: &str) -> Result<Viewport, String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {raw:?}"))?;
    let width = parse_dimension(width, "width")?;
    let height = parse_dimension(height, "height")?;
    if width <= 0.0 || height <= 0.0 {
        return Err("viewport width and height must be positive".into());
    }
    Ok(Viewport::new(width, height))
}

/// Parse `x,y,width,height`.
pub fn parse_rect(raw: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = raw.split(',').collect();
    let [x, y, width, height] = parts.as_slice() else {
        return Err(format!("expected X,Y,WIDTH,HEIGHT, got {raw:?}"));
    };
    Ok(Rect::new(
        parse_dimension(x, "x")?,
        parse_dimension(y, "y")?,
        parse_dimension(width, "width")?,
        parse_dimension(height, "height")?,
    ))
}

pub fn parse() -> Args {
    Args::parse()
}
