use std::path::PathBuf;

use crate::game::CellCode;

/// Errors raised while turning a snapshot into an environment or looking up rewards
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed board: {len} tile bytes cannot form a {size}x{size} grid of two-character codes")]
    MalformedBoard { size: usize, len: usize },

    #[error("no reward known for cell code {0:?}")]
    UnknownCellCode(CellCode),

    #[error("invalid hero id {0}, must be between 1 and 4")]
    InvalidHeroId(u8),

    #[error("invalid direction {0:?}")]
    InvalidDirection(String),

    #[error("failed to parse turn snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
