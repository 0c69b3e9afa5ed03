//! Error type for hex color parsing.

use thiserror::Error;

/// Returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 4, 6 or 8 digits after stripping '#')
    #[error("invalid hex color length (expected 3, 4, 6 or 8 digits)")]
    InvalidLength,
    /// A character that is not a hexadecimal digit
    #[error("invalid hex digit: {0:?}")]
    InvalidHex(char),
}
