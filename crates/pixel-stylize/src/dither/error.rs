//! Error type for dither pattern names.

use thiserror::Error;

/// Returned when a dither pattern name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParsePatternError {
    #[error("unknown dither pattern: {0} (expected bayer or blue-noise)")]
    Unknown(String),
}
