//! Error types for pixeng.

use std::io;

/// Errors produced by the pixeng engine.
#[derive(Debug, thiserror::Error)]
pub enum PixengError {
    /// The display backend, window, or render surface could not be created.
    #[error("initialization failed: {0}")]
    Init(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    /// An input identifier that does not name a tracked key or mouse button.
    #[error("unknown input: {0}")]
    UnknownInput(String),

    /// An engine operation was called in a lifecycle state that forbids it.
    #[error("invalid engine state: {0}")]
    InvalidState(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, PixengError>;
