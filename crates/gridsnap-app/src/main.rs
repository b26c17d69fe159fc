mod cli;
mod replay;
mod settings;

use std::process::ExitCode;

use gridsnap_common::{Result, Viewport};
use gridsnap_config::GridsnapConfig;
use gridsnap_core::geometry::snap_rect;
use gridsnap_core::{compute_cell_size, GridOverlay};
use tracing_subscriber::EnvFilter;

use cli::{Args, Command};

/// Viewport assumed by `replay` when none is given.
const DEFAULT_VIEWPORT: Viewport = Viewport {
    width: 1600.0,
    height: 960.0,
};

fn init_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                directive
                    .parse()
                    .unwrap_or_else(|_| "gridsnap=info".parse().unwrap()),
            ),
        )
        .init();
}

fn load_config(args: &Args) -> GridsnapConfig {
    if let Some(path) = &args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    gridsnap_config::load_config(args.config.as_deref()).unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        GridsnapConfig::default()
    })
}

fn run(args: Args, config: GridsnapConfig) -> Result<()> {
    match args.command {
        Command::Cells { viewport, grid } => {
            let grid = settings::grid_from_config(&config.grid, grid)?;
            let cell = compute_cell_size(viewport, grid);
            println!("cell: {} x {}", cell.cell_width, cell.cell_height);
            println!("{}", GridOverlay::for_cell(cell).css());
        }
        Command::Snap {
            viewport,
            rect,
            grid,
        } => {
            let grid = settings::grid_from_config(&config.grid, grid)?;
            let cell = compute_cell_size(viewport, grid);
            let snapped = snap_rect(rect, cell);
            println!(
                "{},{},{},{}",
                snapped.x, snapped.y, snapped.width, snapped.height
            );
        }
        Command::Replay {
            script,
            viewport,
            state,
            realtime,
        } => {
            let url = replay::run_replay(replay::ReplayOptions {
                script: &script,
                viewport: viewport.unwrap_or(DEFAULT_VIEWPORT),
                state_url: state.as_deref(),
                realtime,
                grid: settings::grid_from_config(&config.grid, cli::GridArgs::default())?,
                settings: settings::snap_settings_from_config(&config.snap),
                placement: settings::placement_from_config(&config.windows),
            })?;
            println!("{url}");
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config load is logged through a temporary subscriber; the configured
    // level applies from here on unless overridden.
    let early_directive = args.log_level.as_deref().unwrap_or("gridsnap=warn");
    let config = {
        let _guard = tracing::subscriber::set_default(
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(EnvFilter::new(early_directive))
                .finish(),
        );
        load_config(&args)
    };
    init_logging(&settings::log_directive(args.log_level.as_deref(), &config));

    tracing::debug!("gridsnap v{} starting", env!("CARGO_PKG_VERSION"));
    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
