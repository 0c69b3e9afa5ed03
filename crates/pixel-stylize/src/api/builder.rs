//! Compositor -- the primary entry point for the crate.
//!
//! [`Compositor`] owns one [`StylizeOptions`] value and runs the three
//! stages over a frame in their fixed order.

use crate::buffer::{ensure_matching, ColorBuffer, DepthBuffer};
use crate::config::StylizeOptions;
use crate::stages::{ColorStylizer, OutlineCompositor, Pixelizer};

use super::StylizeError;

/// Full stylization pipeline for one configuration.
///
/// # Design
///
/// - Constructed from a [`StylizeOptions`], which is already clamped
/// - [`render()`](Self::render) takes `&self`, so one compositor can be
///   reused across frames and shared between threads
/// - Stages run in the order Pixelizer -> Color Stylizer -> Outline
///   Compositor; each consumes the previous stage's complete output
/// - Buffer dimensions are validated before any stage runs
///
/// # Example
///
/// ```
/// use pixel_stylize::{ColorBuffer, Compositor, DepthBuffer, Rgba, StylizeOptions};
///
/// let options = StylizeOptions::new().with_pixel_size(2).with_color_count(4);
/// let compositor = Compositor::new(options);
///
/// let color = ColorBuffer::new(4, 4, Rgba::rgb(0.2, 0.4, 0.6)).unwrap();
/// let depth = DepthBuffer::new(4, 4, 0.5).unwrap();
///
/// let frame = compositor.render(&color, &depth).unwrap();
/// assert_eq!(frame.dimensions(), (4, 4));
/// ```
#[derive(Debug, Clone)]
pub struct Compositor {
    options: StylizeOptions,
}

impl Compositor {
    pub fn new(options: StylizeOptions) -> Self {
        Self { options }
    }

    #[inline]
    pub fn options(&self) -> &StylizeOptions {
        &self.options
    }

    /// Run the pipeline and return the stylized frame.
    ///
    /// Fails with [`StylizeError::DimensionMismatch`] when the color and
    /// depth buffers differ in size; no stage runs in that case.
    pub fn render(
        &self,
        color: &ColorBuffer,
        depth: &DepthBuffer,
    ) -> Result<ColorBuffer, StylizeError> {
        ensure_matching(color, depth)?;

        // 1. Pixelize
        let pixelated = Pixelizer::from_options(&self.options).apply(color);

        // 2. Adjust, dither, quantize
        let stylized = ColorStylizer::from_options(&self.options).apply(&pixelated);

        // 3. Outline
        OutlineCompositor::from_options(&self.options).apply(&stylized, depth)
    }

    /// Render into a temporary frame, then copy it back over `color`.
    ///
    /// `color` is only written after the whole pipeline has finished, so a
    /// failed render leaves it untouched.
    pub fn render_in_place(
        &self,
        color: &mut ColorBuffer,
        depth: &DepthBuffer,
    ) -> Result<(), StylizeError> {
        let frame = self.render(color, depth)?;
        color.copy_from(&frame)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(StylizeOptions::default())
    }
}
