//! Error types for the tariffbook-core library.

use thiserror::Error;

/// Main error type for the tariffbook library.
#[derive(Error, Debug)]
pub enum TariffError {
    /// Schedule row-shaping or assembly error.
    #[error("schedule error: {0}")]
    Schedule(#[from] ScheduleError),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while shaping raw schedule rows.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A raw row is wider than the configured table width, which means the
    /// upstream extraction changed layout and positional fields would
    /// misalign.
    #[error("row {row} has {found} cells, expected at most {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },
}

/// Result type for the tariffbook library.
pub type Result<T> = std::result::Result<T, TariffError>;
