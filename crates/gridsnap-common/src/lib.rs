pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, GridsnapError, HostError, PersistError};
pub use id::new_id;
pub use types::{GridConfig, Millis, Rect, Viewport, WindowId};

pub type Result<T> = std::result::Result<T, GridsnapError>;
