//! Scripted replay of window events against the headless host.

mod driver;
mod script;

pub use driver::ReplayDriver;
pub use script::Script;

use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;

use gridsnap_common::{GridConfig, GridsnapError, Result, Viewport};
use gridsnap_core::{HeadlessHost, PlacementDefaults, SnapController, SnapSettings, UrlStateStore};

/// Page URL used when no `--state` is given.
pub const DEFAULT_PAGE_URL: &str = "/";

pub struct ReplayOptions<'a> {
    pub script: &'a Path,
    pub viewport: Viewport,
    pub state_url: Option<&'a str>,
    pub realtime: bool,
    pub grid: GridConfig,
    pub settings: SnapSettings,
    pub placement: PlacementDefaults,
}

/// Run a script file and return the final page URL.
pub fn run_replay(options: ReplayOptions<'_>) -> Result<String> {
    let script = Script::load(options.script)?;
    tracing::info!(
        steps = script.steps.len(),
        path = %options.script.display(),
        "replay script loaded"
    );

    let viewport = Rc::new(Cell::new(options.viewport));
    let store = UrlStateStore::from_url(options.state_url.unwrap_or(DEFAULT_PAGE_URL));
    let state = store.load(options.grid);
    let controller = SnapController::new(HeadlessHost::new(), Rc::clone(&viewport), store, state)
        .with_settings(options.settings)
        .with_placement(options.placement);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    runtime.block_on(async {
        let mut driver = ReplayDriver::new(controller, viewport);
        if options.realtime {
            driver = driver.realtime();
        }
        driver.run(&script).await?;
        tracing::info!(windows = driver.state().len(), "replay finished");
        Ok::<_, GridsnapError>(driver.url())
    })
}
