use gridsnap_common::{HostError, Rect, WindowId};
use serde::{Deserialize, Serialize};

pub mod headless;

pub use headless::{HeadlessHost, HeadlessWindow};

pub type Result<T> = std::result::Result<T, HostError>;

/// Visual chrome state the host should show for a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    Normal,
    Minimized,
}

/// Notifications a window host reports back about its windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum HostEvent {
    Moved(WindowId, Rect),
    Resized(WindowId, f64, f64),
    Closed(WindowId),
    Minimized(WindowId),
    Maximized(WindowId),
    Restored(WindowId),
}

impl HostEvent {
    pub fn window_id(&self) -> &WindowId {
        match self {
            Self::Moved(id, _)
            | Self::Resized(id, _, _)
            | Self::Closed(id)
            | Self::Minimized(id)
            | Self::Maximized(id)
            | Self::Restored(id) => id,
        }
    }
}

/// A command issued to the window host, as recorded by [`HeadlessHost`].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCommand {
    Open { id: WindowId, frame: Rect, url: String },
    Move { id: WindowId, x: f64, y: f64 },
    Resize { id: WindowId, width: f64, height: f64 },
    Minimize(WindowId),
    Maximize(WindowId),
    Close(WindowId),
    SetContent { id: WindowId, url: Option<String> },
    SetAppearance { id: WindowId, appearance: Appearance },
}

/// Capability interface to the widget that actually draws floating windows.
///
/// The controller only issues these commands and reads live geometry; it
/// never looks at host internals. Notifications flow the other way: the host
/// adapter forwards each [`HostEvent`] to the controller.
pub trait WindowHost {
    fn open(&mut self, id: &WindowId, frame: Rect, url: &str) -> Result<()>;
    fn move_to(&mut self, id: &WindowId, x: f64, y: f64) -> Result<()>;
    fn resize(&mut self, id: &WindowId, width: f64, height: f64) -> Result<()>;
    fn minimize(&mut self, id: &WindowId) -> Result<()>;
    fn maximize(&mut self, id: &WindowId) -> Result<()>;
    fn close(&mut self, id: &WindowId) -> Result<()>;

    /// Live on-screen rectangle, `None` if the window is not (yet) mounted.
    fn frame(&self, id: &WindowId) -> Option<Rect>;
    /// URL currently loaded in the embedded content, `None` when blank.
    fn content(&self, id: &WindowId) -> Option<String>;
    /// Load `url` into the embedded content, or blank it with `None`.
    fn set_content(&mut self, id: &WindowId, url: Option<&str>) -> Result<()>;
    fn set_appearance(&mut self, id: &WindowId, appearance: Appearance) -> Result<()>;
}
