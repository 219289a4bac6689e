//! Error types for oxchroma

use thiserror::Error;

/// Result type for oxchroma operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in oxchroma operations
///
/// Conversion math never fails; these cover rejected input and
/// violated call contracts.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// String did not match the color grammar
    #[error("Invalid color string: {0:?}")]
    InvalidColorString(String),

    /// Component count does not match the color string prefix
    #[error("Color prefix {prefix:?} expects {expected} components, got {actual}")]
    Arity {
        prefix: String,
        expected: usize,
        actual: usize,
    },

    /// Encoding name is not one of `rgb`, `rgba`, `RGB`, `RGBA`
    #[error("Unknown color encoding: {0:?}")]
    UnknownEncoding(String),

    /// Interleaved value array is not a multiple of the encoding stride
    #[error("Value count {len} is not a multiple of stride {stride}")]
    Stride { stride: usize, len: usize },

    /// Explicit positions do not match the decoded stop count
    #[error("Position count mismatch: expected {expected}, got {actual}")]
    PositionCount { expected: usize, actual: usize },

    /// Explicit positions are not monotonically non-decreasing
    #[error("Stop positions must be non-decreasing")]
    UnsortedPositions,

    /// No preset with the requested identifier
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    /// Preset carries no color arrays
    #[error("Preset {0} has no colors")]
    EmptyPreset(String),

    /// Preset JSON could not be decoded
    #[error("Preset JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
