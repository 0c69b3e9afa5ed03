//! Generic 2D pixel grid.

use rayon::prelude::*;

use crate::api::StylizeError;
use crate::color::Rgba;

/// A row-major grid of pixels with non-zero dimensions.
///
/// # Example
///
/// ```
/// use pixel_stylize::{ColorBuffer, Rgba};
///
/// let buffer = ColorBuffer::new(3, 2, Rgba::WHITE).unwrap();
/// assert_eq!(buffer.dimensions(), (3, 2));
/// assert_eq!(buffer.get(2, 1), Rgba::WHITE);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer<T> {
    /// Pixels, row-major order.
    pixels: Vec<T>,
    width: usize,
    height: usize,
}

/// RGBA frame buffer.
pub type ColorBuffer = ImageBuffer<Rgba>;

/// Per-pixel scene depth, normalized to 0.0..=1.0.
pub type DepthBuffer = ImageBuffer<f32>;

/// `true` where an outline is drawn.
pub type EdgeMask = ImageBuffer<bool>;

fn check_dimensions(width: usize, height: usize) -> Result<(), StylizeError> {
    if width == 0 || height == 0 {
        return Err(StylizeError::EmptyBuffer { width, height });
    }
    Ok(())
}

/// Fail with [`StylizeError::DimensionMismatch`] unless `color` and `depth`
/// share the same resolution.
pub fn ensure_matching(color: &ColorBuffer, depth: &DepthBuffer) -> Result<(), StylizeError> {
    if color.same_dimensions(depth) {
        return Ok(());
    }
    Err(StylizeError::DimensionMismatch {
        color_width: color.width,
        color_height: color.height,
        depth_width: depth.width,
        depth_height: depth.height,
    })
}

impl<T: Copy> ImageBuffer<T> {
    /// Create a buffer with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Result<Self, StylizeError> {
        check_dimensions(width, height)?;
        Ok(Self {
            pixels: vec![fill; width * height],
            width,
            height,
        })
    }

    /// Wrap existing row-major pixel data.
    ///
    /// Fails when a dimension is zero or when `pixels.len() != width * height`.
    pub fn from_pixels(pixels: Vec<T>, width: usize, height: usize) -> Result<Self, StylizeError> {
        check_dimensions(width, height)?;
        let expected = width * height;
        if pixels.len() != expected {
            return Err(StylizeError::BufferLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Whether `other` has the same width and height.
    #[inline]
    pub fn same_dimensions<U>(&self, other: &ImageBuffer<U>) -> bool {
        self.width == other.width && self.height == other.height
    }

    #[inline]
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<T> {
        self.pixels
    }

    /// Pixels of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[T] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[y * self.width + x]
    }

    /// Read the pixel at signed coordinates, clamped to the nearest valid
    /// row and column.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> T {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.pixels[y * self.width + x]
    }

    /// Number of pixels matching `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&T) -> bool) -> usize {
        self.pixels.iter().filter(|p| predicate(p)).count()
    }

    /// Overwrite this buffer with the contents of `source`.
    ///
    /// Both buffers must have the same dimensions.
    pub fn copy_from(&mut self, source: &ImageBuffer<T>) -> Result<(), StylizeError> {
        if !self.same_dimensions(source) {
            return Err(StylizeError::BufferLength {
                expected: self.pixels.len(),
                actual: source.pixels.len(),
            });
        }
        self.pixels.copy_from_slice(&source.pixels);
        Ok(())
    }

    /// Build a new buffer of the same dimensions by evaluating `f(x, y, pixel)`
    /// for every pixel. Rows are computed in parallel.
    pub fn map<U, F>(&self, f: F) -> ImageBuffer<U>
    where
        T: Sync,
        U: Copy + Default + Send,
        F: Fn(usize, usize, T) -> U + Sync,
    {
        ImageBuffer::generate(self.width, self.height, |x, y| f(x, y, self.get(x, y)))
    }
}

impl<T: Copy + Default + Send> ImageBuffer<T> {
    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    ///
    /// Rows are filled in parallel; the result does not depend on
    /// scheduling because every pixel is computed independently.
    pub fn from_fn<F>(width: usize, height: usize, f: F) -> Result<Self, StylizeError>
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        check_dimensions(width, height)?;
        Ok(Self::generate(width, height, f))
    }

    /// Fill a buffer whose dimensions are already known to be non-zero.
    pub(crate) fn generate<F>(width: usize, height: usize, f: F) -> Self
    where
        F: Fn(usize, usize) -> T + Sync,
    {
        let mut pixels = vec![T::default(); width * height];
        pixels
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.iter_mut().enumerate() {
                    *pixel = f(x, y);
                }
            });
        Self {
            pixels,
            width,
            height,
        }
    }
}

impl ColorBuffer {
    /// Decode tightly packed 8-bit RGBA data.
    pub fn from_rgba8(bytes: &[u8], width: usize, height: usize) -> Result<Self, StylizeError> {
        check_dimensions(width, height)?;
        let expected = width * height * 4;
        if bytes.len() != expected {
            return Err(StylizeError::BufferLength {
                expected,
                actual: bytes.len(),
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|p| Rgba::from_u8(p[0], p[1], p[2], p[3]))
            .collect();
        Self::from_pixels(pixels, width, height)
    }

    /// Encode as tightly packed 8-bit RGBA (`width * height * 4` bytes).
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_bytes()).collect()
    }
}
