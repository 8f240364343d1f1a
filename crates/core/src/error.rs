//! Error types for the nutil toolkit.

use thiserror::Error;

/// Errors produced when constructing toolkit values or parsing their text forms.
///
/// The math functions themselves never fail; they clamp or return a miss.
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// Width or height was zero (or overflowed) when creating a pixel buffer.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A pixel vector did not match the declared buffer size.
    #[error("dimension mismatch: expected {expected} pixels for {width}x{height}, got {got}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A vector string could not be parsed.
    #[error("invalid vector: {0}")]
    InvalidVector(String),

    /// Reading or writing an image failed.
    #[error("I/O error: {0}")]
    Io(String),
}
