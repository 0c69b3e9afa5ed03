//! Ordered dithering offsets.
//!
//! Dithering in this crate is ordered (threshold-matrix) dithering: the
//! offset added before quantization depends only on the pixel coordinates,
//! never on neighboring pixels or on a random source. A static frame
//! therefore dithers to the same output every time, and every pixel can be
//! computed independently.
//!
//! Offsets are centered and lie strictly inside (-0.5, 0.5). Scaled by one
//! quantization step and a strength of at most 1.0 they can never move an
//! already-quantized value onto a different level, which keeps
//! re-quantization a no-op.
//!
//! | Pattern | Period | Look |
//! |---------|--------|------|
//! | [`DitherPattern::Bayer`] | 8x8 | regular cross-hatch, classic pixel-art |
//! | [`DitherPattern::BlueNoise`] | 64x64 | irregular, faint diagonal lattice |

mod bayer;
mod blue_noise;
mod error;

use serde::{Deserialize, Serialize};

pub use bayer::BAYER_8;
pub use blue_noise::BLUE_NOISE_64;
pub use error::ParsePatternError;

/// Threshold pattern used to spread quantization error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DitherPattern {
    /// 8x8 Bayer matrix (ordered dithering)
    #[default]
    Bayer,
    /// 64x64 low-discrepancy (R2 sequence) tile
    BlueNoise,
}

impl DitherPattern {
    /// Centered threshold for pixel `(x, y)`, in the open interval (-0.5, 0.5).
    ///
    /// # Example
    ///
    /// ```
    /// use pixel_stylize::DitherPattern;
    ///
    /// let offset = DitherPattern::Bayer.offset(3, 5);
    /// assert!(offset > -0.5 && offset < 0.5);
    /// assert_eq!(offset, DitherPattern::Bayer.offset(3 + 8, 5 + 16));
    /// ```
    #[inline]
    pub fn offset(self, x: usize, y: usize) -> f32 {
        match self {
            DitherPattern::Bayer => {
                let rank = BAYER_8[y % 8][x % 8] as f32;
                (rank + 0.5) / 64.0 - 0.5
            }
            DitherPattern::BlueNoise => {
                let rank = BLUE_NOISE_64[y % 64][x % 64] as f32;
                (rank + 0.5) / 256.0 - 0.5
            }
        }
    }

    /// Name used in configuration files.
    pub fn as_str(self) -> &'static str {
        match self {
            DitherPattern::Bayer => "bayer",
            DitherPattern::BlueNoise => "blue-noise",
        }
    }
}

impl std::str::FromStr for DitherPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bayer" | "ordered" => Ok(DitherPattern::Bayer),
            "blue-noise" | "bluenoise" | "blue_noise" => Ok(DitherPattern::BlueNoise),
            other => Err(ParsePatternError::Unknown(other.to_string())),
        }
    }
}
