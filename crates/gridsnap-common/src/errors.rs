use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("unknown window: {0}")]
    UnknownWindow(WindowId),

    #[error("window host rejected command: {0}")]
    Rejected(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("failed to encode page state: {0}")]
    Encode(String),

    #[error("failed to decode page state: {0}")]
    Decode(String),
}

#[derive(Debug, thiserror::Error)]
pub enum GridsnapError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Host(#[from] HostError),

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
