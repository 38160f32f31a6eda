//! Error types
//!
//! Only precondition violations and config I/O are errors. Out-of-range grid
//! queries and unknown input codes are regular, non-failing outcomes.

use thiserror::Error;

/// World generation failure
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WorldError {
    /// Width and height must both be positive
    #[error("invalid world dimensions {width}x{height}: both must be positive")]
    InvalidDimensions { width: i32, height: i32 },
    /// Stored grid does not hold exactly width * height tiles
    #[error("grid holds {actual} tiles, expected {expected}")]
    TileCountMismatch { expected: usize, actual: usize },
    /// Player body width and height must both be positive
    #[error("invalid body size {width}x{height}: both must be positive")]
    InvalidBodySize { width: f32, height: f32 },
}

/// Settings load/save failure
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading/writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed or mistyped JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
