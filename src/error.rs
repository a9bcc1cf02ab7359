//! Error types for marga-nav.

use thiserror::Error;

/// Navigation error type.
///
/// Route queries fail with exactly two kinds: an unknown location code or an
/// unreachable goal. Both are ordinary return values, never panics.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Room not found: {0}")]
    RoomNotFound(String),

    #[error("No path found")]
    NoPathFound,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for NavError {
    fn from(e: toml::de::Error) -> Self {
        NavError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NavError>;
