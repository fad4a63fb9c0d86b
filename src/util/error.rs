//! Error types for bezier-spin.

use thiserror::Error;

/// Result alias for bezier-spin operations.
pub type SpinResult<T> = std::result::Result<T, SpinError>;

/// Errors that can occur when sampling curves or rotating pixel buffers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpinError {
    /// A binomial row was requested outside the span the table was built for.
    #[error("binomial row {n} out of range (table holds rows 1..={max})")]
    RowOutOfRange { n: usize, max: usize },
    /// A control point count outside the accepted range.
    #[error("invalid control point count {count}: expected a value in {min}..={max}")]
    InvalidPointCount { count: usize, min: usize, max: usize },
    /// Width or height is zero or overflows the buffer size.
    #[error("invalid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// The backing buffer is shorter than the dimensions require.
    #[error("buffer too small: needed {needed} pixels, got {got}")]
    BufferTooSmall { needed: usize, got: usize },
    /// The input data or parameters are invalid.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Image decoding or encoding failed.
    #[error("image i/o failed: {reason}")]
    ImageIo { reason: String },
}
