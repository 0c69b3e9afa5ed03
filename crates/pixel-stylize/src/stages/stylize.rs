//! Color adjustment, dithering and palette quantization.

use crate::buffer::ColorBuffer;
use crate::color::Rgba;
use crate::config::StylizeOptions;
use crate::dither::DitherPattern;

/// Quantize `value` to one of `color_count` evenly spaced levels in 0.0..=1.0.
///
/// `level = round(value * (n - 1)) / (n - 1)` after clamping the input.
/// Applying it twice gives the same result as applying it once.
///
/// # Example
///
/// ```
/// use pixel_stylize::quantize_channel;
///
/// assert_eq!(quantize_channel(0.49, 2), 0.0);
/// assert_eq!(quantize_channel(0.51, 2), 1.0);
/// assert_eq!(quantize_channel(0.3, 3), 0.5);
/// ```
#[inline]
pub fn quantize_channel(value: f32, color_count: u32) -> f32 {
    let steps = color_count.max(2).saturating_sub(1) as f32;
    (value.clamp(0.0, 1.0) * steps).round() / steps
}

/// Brightness, contrast and saturation adjustment followed by optional
/// ordered dithering and per-channel quantization.
///
/// Alpha is carried through untouched.
#[derive(Debug, Clone, Copy)]
pub struct ColorStylizer {
    color_count: u32,
    saturation: f32,
    contrast: f32,
    brightness: f32,
    /// Dither amplitude in channel units (strength * one quantization step),
    /// `None` when dithering is disabled.
    dither_amplitude: Option<f32>,
    dither_pattern: DitherPattern,
    /// Edge length of one dither cell; matches the pixelization block so a
    /// block receives a single offset and stays uniform.
    dither_cell: usize,
}

impl ColorStylizer {
    pub fn from_options(options: &StylizeOptions) -> Self {
        let step = 1.0 / options.quantization_levels() as f32;
        let dither_amplitude = (options.dither_enabled() && options.dither_strength() > 0.0)
            .then(|| options.dither_strength() * step);
        Self {
            color_count: options.color_count(),
            saturation: options.saturation(),
            contrast: options.contrast(),
            brightness: options.brightness(),
            dither_amplitude,
            dither_pattern: options.dither_pattern(),
            dither_cell: options.pixel_size().max(1) as usize,
        }
    }

    /// Brightness (scale), contrast (scale about 0.5), then saturation
    /// (interpolation from luminance), clamped to 0.0..=1.0.
    #[inline]
    pub fn adjust(&self, color: Rgba) -> Rgba {
        let c = color
            .map_rgb(|v| v * self.brightness)
            .map_rgb(|v| (v - 0.5) * self.contrast + 0.5);
        let luma = c.luminance();
        c.map_rgb(|v| luma + (v - luma) * self.saturation)
            .clamped()
    }

    /// Quantize the three color channels.
    #[inline]
    pub fn quantize(&self, color: Rgba) -> Rgba {
        color.map_rgb(|v| quantize_channel(v, self.color_count))
    }

    /// Full per-pixel transform for the pixel at `(x, y)`.
    ///
    /// The dither offset is looked up per pixelization block, so the offset
    /// for `(x, y)` is the pattern value at `(x / pixel_size, y / pixel_size)`.
    #[inline]
    pub fn stylize_pixel(&self, x: usize, y: usize, color: Rgba) -> Rgba {
        let adjusted = self.adjust(color);
        let dithered = match self.dither_amplitude {
            Some(amplitude) => {
                let (cx, cy) = (x / self.dither_cell, y / self.dither_cell);
                let offset = self.dither_pattern.offset(cx, cy) * amplitude;
                adjusted.map_rgb(|v| (v + offset).clamp(0.0, 1.0))
            }
            None => adjusted,
        };
        self.quantize(dithered)
    }

    pub fn apply(&self, source: &ColorBuffer) -> ColorBuffer {
        source.map(|x, y, color| self.stylize_pixel(x, y, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(options: StylizeOptions) -> ColorStylizer {
        ColorStylizer::from_options(&options.with_dither(false))
    }

    #[test]
    fn test_quantize_channel_levels() {
        assert_eq!(quantize_channel(0.0, 16), 0.0);
        assert_eq!(quantize_channel(1.0, 16), 1.0);
        assert_eq!(quantize_channel(1.7, 16), 1.0);
        assert_eq!(quantize_channel(-0.2, 16), 0.0);
        assert!((quantize_channel(0.5, 5) - 0.5).abs() < 1e-6);
        assert!((quantize_channel(0.4, 5) - 0.5).abs() < 1e-6);
        assert!((quantize_channel(0.1, 5) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn test_quantize_channel_idempotent() {
        for n in 2..=64 {
            for i in 0..=100 {
                let once = quantize_channel(i as f32 / 100.0, n);
                assert_eq!(quantize_channel(once, n), once, "n={n} i={i}");
            }
        }
    }

    #[test]
    fn test_identity_adjustments() {
        let stylizer = plain(StylizeOptions::new());
        let color = Rgba::new(0.2, 0.6, 0.9, 0.5);
        let adjusted = stylizer.adjust(color);
        assert!((adjusted.r - 0.2).abs() < 1e-6);
        assert!((adjusted.g - 0.6).abs() < 1e-6);
        assert!((adjusted.b - 0.9).abs() < 1e-6);
        assert_eq!(adjusted.a, 0.5);
    }

    #[test]
    fn test_brightness_scales() {
        let stylizer = plain(StylizeOptions::new().with_brightness(2.0));
        let adjusted = stylizer.adjust(Rgba::rgb(0.2, 0.3, 0.8));
        assert!((adjusted.r - 0.4).abs() < 1e-6);
        assert!((adjusted.g - 0.6).abs() < 1e-6);
        assert_eq!(adjusted.b, 1.0, "clamped");
    }

    #[test]
    fn test_contrast_pivots_on_mid_gray() {
        let stylizer = plain(StylizeOptions::new().with_contrast(2.0));
        let mid = stylizer.adjust(Rgba::rgb(0.5, 0.5, 0.5));
        assert!((mid.r - 0.5).abs() < 1e-6);
        let dark = stylizer.adjust(Rgba::rgb(0.4, 0.4, 0.4));
        assert!((dark.r - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        let stylizer = plain(StylizeOptions::new().with_saturation(0.0));
        let grey = stylizer.adjust(Rgba::rgb(1.0, 0.0, 0.0));
        assert!((grey.r - 0.2126).abs() < 1e-6);
        assert_eq!(grey.r, grey.g);
        assert_eq!(grey.g, grey.b);
    }

    #[test]
    fn test_adjustment_order_brightness_before_contrast() {
        // brightness 2 then contrast 2 on 0.3: (0.6 - 0.5) * 2 + 0.5 = 0.7
        // contrast first would give ((0.3 - 0.5) * 2 + 0.5) * 2 = 0.2
        let stylizer = plain(
            StylizeOptions::new()
                .with_brightness(2.0)
                .with_contrast(2.0),
        );
        let out = stylizer.adjust(Rgba::rgb(0.3, 0.3, 0.3));
        assert!((out.r - 0.7).abs() < 1e-5);
    }

    #[test]
    fn test_two_colors_give_binary_channels() {
        let stylizer = ColorStylizer::from_options(&StylizeOptions::new().with_color_count(2));
        let source = ColorBuffer::from_fn(16, 16, |x, y| {
            Rgba::rgb(x as f32 / 15.0, y as f32 / 15.0, 0.5)
        })
        .unwrap();
        let out = stylizer.apply(&source);
        for p in out.pixels() {
            for c in [p.r, p.g, p.b] {
                assert!(c == 0.0 || c == 1.0, "channel {c}");
            }
        }
    }

    #[test]
    fn test_dither_spreads_flat_input() {
        // 0.5 sits exactly between the two levels; a full-strength dither must
        // split it into both instead of banding to one.
        let options = StylizeOptions::new()
            .with_pixel_size(1)
            .with_color_count(2)
            .with_dither_strength(1.0);
        let stylizer = ColorStylizer::from_options(&options);
        let source = ColorBuffer::new(8, 8, Rgba::rgb(0.45, 0.45, 0.45)).unwrap();
        let out = stylizer.apply(&source);
        let white = out.count_where(|p| p.r == 1.0);
        assert!(white > 0 && white < 64, "white pixels: {white}");
    }

    #[test]
    fn test_dither_is_deterministic() {
        let stylizer = ColorStylizer::from_options(
            &StylizeOptions::new().with_dither_pattern(DitherPattern::BlueNoise),
        );
        let source = ColorBuffer::from_fn(20, 20, |x, y| {
            Rgba::rgb((x + y) as f32 / 40.0, 0.3, 0.7)
        })
        .unwrap();
        assert_eq!(stylizer.apply(&source), stylizer.apply(&source));
    }

    #[test]
    fn test_zero_strength_matches_disabled() {
        let source = ColorBuffer::from_fn(10, 10, |x, _| Rgba::rgb(x as f32 / 9.0, 0.5, 0.2)).unwrap();
        let off = ColorStylizer::from_options(&StylizeOptions::new().with_dither(false));
        let zero = ColorStylizer::from_options(&StylizeOptions::new().with_dither_strength(0.0));
        assert_eq!(off.apply(&source), zero.apply(&source));
    }

    #[test]
    fn test_dither_offset_constant_within_block() {
        let options = StylizeOptions::new()
            .with_pixel_size(4)
            .with_color_count(2)
            .with_dither_strength(1.0);
        let stylizer = ColorStylizer::from_options(&options);
        let source = ColorBuffer::new(16, 16, Rgba::rgb(0.45, 0.45, 0.45)).unwrap();
        let out = stylizer.apply(&source);
        for y in 0..16 {
            for x in 0..16 {
                assert_eq!(out.get(x, y), out.get((x / 4) * 4, (y / 4) * 4));
            }
        }
    }

    #[test]
    fn test_alpha_passes_through() {
        let stylizer = ColorStylizer::from_options(&StylizeOptions::new().with_color_count(2));
        let out = stylizer.stylize_pixel(0, 0, Rgba::new(0.3, 0.3, 0.3, 0.25));
        assert_eq!(out.a, 0.25);
    }
}
