pub mod controller;
pub mod geometry;
pub mod host;
pub mod overlay;
pub mod persist;
pub mod scheduler;
pub mod state;
pub mod viewport;

pub use controller::{Axis, AxisPhase, PlacementDefaults, SnapController, SnapSettings};
pub use geometry::{compute_cell_size, snap_dimension, snap_position, CellSize, GridRect};
pub use host::{HeadlessHost, HostEvent, WindowHost};
pub use overlay::GridOverlay;
pub use persist::{StateSink, UrlStateStore};
pub use scheduler::TimerQueue;
pub use state::{PageState, WindowPatch, WindowState};
pub use viewport::ViewportSource;
