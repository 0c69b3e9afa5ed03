//! Block pixelization.

use crate::buffer::ColorBuffer;
use crate::config::StylizeOptions;

/// Maps every pixel to one representative sample of its block.
///
/// Blocks are `pixel_size x pixel_size`, aligned to the top-left corner of
/// the frame. The representative is the texel at the block center
/// (`block_origin + pixel_size / 2`); partial blocks at the right and bottom
/// edges clamp that sample to the last valid column or row.
///
/// # Example
///
/// ```
/// use pixel_stylize::{ColorBuffer, Pixelizer, Rgba};
///
/// let pixels = (0..16).map(|i| Rgba::from_u8(i * 10, 0, 0, 255)).collect();
/// let source = ColorBuffer::from_pixels(pixels, 4, 4).unwrap();
///
/// let out = Pixelizer::new(2).apply(&source);
/// // The top-left 2x2 block takes the color of its center texel (1, 1).
/// assert_eq!(out.get(0, 0), source.get(1, 1));
/// assert_eq!(out.get(1, 0), source.get(1, 1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Pixelizer {
    pixel_size: usize,
}

impl Pixelizer {
    /// `pixel_size` of 0 is treated as 1.
    pub fn new(pixel_size: u32) -> Self {
        Self {
            pixel_size: pixel_size.max(1) as usize,
        }
    }

    pub fn from_options(options: &StylizeOptions) -> Self {
        Self::new(options.pixel_size())
    }

    #[inline]
    pub fn pixel_size(&self) -> usize {
        self.pixel_size
    }

    /// Source coordinate sampled for output coordinate `coord` along an axis of length `len`.
    #[inline]
    fn sample_coord(&self, coord: usize, len: usize) -> usize {
        let k = self.pixel_size;
        let center = (coord / k) * k + k / 2;
        center.min(len - 1)
    }

    pub fn apply(&self, source: &ColorBuffer) -> ColorBuffer {
        if self.pixel_size == 1 {
            return source.clone();
        }
        let (width, height) = source.dimensions();
        source.map(|x, y, _| {
            source.get(self.sample_coord(x, width), self.sample_coord(y, height))
        })
    }
}
