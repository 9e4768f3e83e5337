//! Error types for level and settings loading

use std::path::PathBuf;

/// Errors raised while reading or parsing a level tile grid
#[derive(thiserror::Error, Debug)]
pub enum LevelError {
    /// Level source could not be read
    #[error("cannot read level {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source contained no rows
    #[error("level source is empty")]
    Empty,

    /// A token was not an unsigned integer tile code
    #[error("invalid tile {token:?} at row {row}, column {col}")]
    InvalidTile {
        row: usize,
        col: usize,
        token: String,
    },

    /// A row's width differs from the first row's
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors raised while loading settings
#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type for level loading
pub type LevelResult<T> = std::result::Result<T, LevelError>;

/// Result type for settings loading
pub type SettingsResult<T> = std::result::Result<T, SettingsError>;
