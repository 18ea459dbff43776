//! Error types for ironplan.

use thiserror::Error;

/// Errors from parsing user-supplied text (CLI arguments, stored ids).
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unknown lift: {0}")]
    UnknownLift(String),

    #[error("invalid plate spec '{0}', expected <weight>x<quantity> (e.g. 45x4)")]
    InvalidPlate(String),

    #[error("invalid coordinates: {0}")]
    InvalidLocation(String),
}

/// Errors from the persistence layer.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("sqlite: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("cannot (de)serialize record: {0}")]
    Serialization(#[from] serde_json::Error),
}
