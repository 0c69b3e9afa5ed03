//! Depth-discontinuity outlines.

use crate::api::StylizeError;
use crate::buffer::{ensure_matching, ColorBuffer, DepthBuffer, EdgeMask};
use crate::color::Rgba;
use crate::config::StylizeOptions;

/// Draws `outline_color` wherever the depth buffer has a step larger than
/// `depth_threshold`.
///
/// # Edge detection
///
/// The kernel is a cross of radius `r = max(1, round(outline_thickness))`:
/// depth is sampled at distances `1..=r` left, right, up and down. The edge
/// strength of a pixel is the largest absolute difference between its own
/// depth and any of those samples; it is an edge when that strength is
/// strictly greater than the threshold.
///
/// Samples outside the frame clamp to the nearest valid row or column.
/// Because every distance up to `r` is sampled, a clamped sample always
/// repeats a depth already inside the kernel, so the frame border never
/// produces an outline on its own.
///
/// # Blending
///
/// Edge pixels get `outline_color` composited over them with the outline's
/// alpha; an opaque outline color replaces the pixel.
#[derive(Debug, Clone, Copy)]
pub struct OutlineCompositor {
    enabled: bool,
    radius: usize,
    threshold: f32,
    color: Rgba,
}

impl OutlineCompositor {
    pub fn from_options(options: &StylizeOptions) -> Self {
        Self {
            enabled: options.outline_enabled(),
            radius: options.outline_thickness().round().max(1.0) as usize,
            threshold: options.depth_threshold(),
            color: options.outline_color(),
        }
    }

    /// Kernel radius in pixels.
    #[inline]
    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Largest absolute depth difference between `(x, y)` and its kernel samples.
    pub fn edge_strength(&self, depth: &DepthBuffer, x: usize, y: usize) -> f32 {
        let center = depth.get(x, y);
        let (cx, cy) = (x as isize, y as isize);
        let mut strength = 0.0f32;
        for d in 1..=self.radius as isize {
            for (dx, dy) in [(d, 0), (-d, 0), (0, d), (0, -d)] {
                let sample = depth.get_clamped(cx + dx, cy + dy);
                strength = strength.max((sample - center).abs());
            }
        }
        strength
    }

    #[inline]
    pub fn is_edge(&self, depth: &DepthBuffer, x: usize, y: usize) -> bool {
        self.edge_strength(depth, x, y) > self.threshold
    }

    /// Edge pixels of `depth`, regardless of whether outlines are enabled.
    pub fn edge_mask(&self, depth: &DepthBuffer) -> EdgeMask {
        depth.map(|x, y, _| self.is_edge(depth, x, y))
    }

    /// Composite the outline color over `color`.
    #[inline]
    pub fn blend(&self, color: Rgba) -> Rgba {
        let a = self.color.a;
        Rgba {
            r: color.r + (self.color.r - color.r) * a,
            g: color.g + (self.color.g - color.g) * a,
            b: color.b + (self.color.b - color.b) * a,
            a: a + color.a * (1.0 - a),
        }
    }

    /// Outline `color` using `depth`.
    ///
    /// When outlines are disabled the result is an exact copy of `color`.
    /// Either way the two buffers must have the same dimensions.
    pub fn apply(
        &self,
        color: &ColorBuffer,
        depth: &DepthBuffer,
    ) -> Result<ColorBuffer, StylizeError> {
        ensure_matching(color, depth)?;
        if !self.enabled {
            return Ok(color.clone());
        }
        Ok(color.map(|x, y, pixel| {
            if self.is_edge(depth, x, y) {
                self.blend(pixel)
            } else {
                pixel
            }
        }))
    }
}
