//! Unified error type for the pixel-stylize public API.
//!
//! The compositor itself cannot fail once its inputs are well formed; every
//! variant here is a violated precondition reported back to the caller.

use thiserror::Error;

/// Error type for buffer construction and compositor calls.
///
/// # Example
///
/// ```
/// use pixel_stylize::{ColorBuffer, StylizeError, Rgba};
///
/// let err = ColorBuffer::from_pixels(vec![Rgba::BLACK; 3], 2, 2).unwrap_err();
/// assert_eq!(err, StylizeError::BufferLength { expected: 4, actual: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StylizeError {
    /// Color and depth buffers do not share the same resolution
    #[error(
        "color buffer is {color_width}x{color_height} but depth buffer is {depth_width}x{depth_height}"
    )]
    DimensionMismatch {
        color_width: usize,
        color_height: usize,
        depth_width: usize,
        depth_height: usize,
    },

    /// A buffer with a zero dimension was supplied
    #[error("empty buffer ({width}x{height})")]
    EmptyBuffer { width: usize, height: usize },

    /// Pixel data length does not match `width * height`
    #[error("pixel data has {actual} entries, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
}
