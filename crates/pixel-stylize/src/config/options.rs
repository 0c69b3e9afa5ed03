//! The immutable parameter set for one render.

use serde::{Deserialize, Serialize};

use super::limits::{self, clamp_f32, clamp_u32};
use crate::color::Rgba;
use crate::dither::DitherPattern;

/// Configuration for the stylization pipeline.
///
/// Fields are private: the only ways to obtain a value are [`Default`], the
/// `with_*` setters and deserialization, and all of them clamp out-of-range
/// inputs instead of rejecting them. Setters consume and return `self`, so a
/// new configuration replaces the old one between frames.
///
/// # Defaults
///
/// | field | default | range |
/// |-------|---------|-------|
/// | pixel size | 4 | 1..=32 |
/// | color count | 16 | 2..=64 |
/// | saturation | 1.0 | 0.0..=2.0 |
/// | contrast | 1.0 | 0.5..=2.0 |
/// | brightness | 1.0 | 0.5..=2.0 |
/// | dithering | on, strength 0.5, Bayer | 0.0..=1.0 |
/// | outline | on, thickness 1.0, black | 0.5..=4.0 |
/// | depth threshold | 0.05 | 0.01..=0.5 |
/// | apply to scene view | false | |
///
/// # Example
///
/// ```
/// use pixel_stylize::StylizeOptions;
///
/// let options = StylizeOptions::new()
///     .with_pixel_size(100)
///     .with_color_count(8)
///     .with_contrast(0.1);
///
/// assert_eq!(options.pixel_size(), 32);
/// assert_eq!(options.color_count(), 8);
/// assert_eq!(options.contrast(), 0.5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawOptions")]
pub struct StylizeOptions {
    pixel_size: u32,
    color_count: u32,
    saturation: f32,
    contrast: f32,
    brightness: f32,
    dither_enabled: bool,
    dither_strength: f32,
    dither_pattern: DitherPattern,
    outline_enabled: bool,
    outline_thickness: f32,
    outline_color: Rgba,
    depth_threshold: f32,
    apply_to_scene_view: bool,
}

impl Default for StylizeOptions {
    fn default() -> Self {
        Self {
            pixel_size: limits::DEFAULT_PIXEL_SIZE,
            color_count: limits::DEFAULT_COLOR_COUNT,
            saturation: limits::DEFAULT_SATURATION,
            contrast: limits::DEFAULT_CONTRAST,
            brightness: limits::DEFAULT_BRIGHTNESS,
            dither_enabled: true,
            dither_strength: limits::DEFAULT_DITHER_STRENGTH,
            dither_pattern: DitherPattern::default(),
            outline_enabled: true,
            outline_thickness: limits::DEFAULT_OUTLINE_THICKNESS,
            outline_color: Rgba::BLACK,
            depth_threshold: limits::DEFAULT_DEPTH_THRESHOLD,
            apply_to_scene_view: false,
        }
    }
}

impl StylizeOptions {
    /// Same as [`StylizeOptions::default()`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that leave a frame untouched: 1-pixel blocks, the finest
    /// palette, no dithering and no outline.
    ///
    /// Even this configuration quantizes to 64 levels per channel.
    pub fn passthrough() -> Self {
        Self::default()
            .with_pixel_size(1)
            .with_color_count(*limits::COLOR_COUNT.end())
            .with_dither(false)
            .with_outline(false)
    }

    // Setters ---------------------------------------------------------------

    /// Block edge length in pixels, clamped to 1..=32.
    #[inline]
    pub fn with_pixel_size(mut self, size: u32) -> Self {
        self.pixel_size = clamp_u32(size, &limits::PIXEL_SIZE);
        self
    }

    /// Quantization levels per channel, clamped to 2..=64.
    #[inline]
    pub fn with_color_count(mut self, count: u32) -> Self {
        self.color_count = clamp_u32(count, &limits::COLOR_COUNT);
        self
    }

    #[inline]
    pub fn with_saturation(mut self, factor: f32) -> Self {
        self.saturation = clamp_f32(factor, &limits::SATURATION, limits::DEFAULT_SATURATION);
        self
    }

    #[inline]
    pub fn with_contrast(mut self, factor: f32) -> Self {
        self.contrast = clamp_f32(factor, &limits::CONTRAST, limits::DEFAULT_CONTRAST);
        self
    }

    #[inline]
    pub fn with_brightness(mut self, factor: f32) -> Self {
        self.brightness = clamp_f32(factor, &limits::BRIGHTNESS, limits::DEFAULT_BRIGHTNESS);
        self
    }

    #[inline]
    pub fn with_dither(mut self, enabled: bool) -> Self {
        self.dither_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_dither_strength(mut self, strength: f32) -> Self {
        self.dither_strength = clamp_f32(
            strength,
            &limits::DITHER_STRENGTH,
            limits::DEFAULT_DITHER_STRENGTH,
        );
        self
    }

    #[inline]
    pub fn with_dither_pattern(mut self, pattern: DitherPattern) -> Self {
        self.dither_pattern = pattern;
        self
    }

    #[inline]
    pub fn with_outline(mut self, enabled: bool) -> Self {
        self.outline_enabled = enabled;
        self
    }

    #[inline]
    pub fn with_outline_thickness(mut self, thickness: f32) -> Self {
        self.outline_thickness = clamp_f32(
            thickness,
            &limits::OUTLINE_THICKNESS,
            limits::DEFAULT_OUTLINE_THICKNESS,
        );
        self
    }

    /// Outline color; each channel is clamped to 0.0..=1.0 (NaN becomes 0).
    #[inline]
    pub fn with_outline_color(mut self, color: Rgba) -> Self {
        let channel = |c: f32| if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
        self.outline_color = Rgba::new(
            channel(color.r),
            channel(color.g),
            channel(color.b),
            channel(color.a),
        );
        self
    }

    #[inline]
    pub fn with_depth_threshold(mut self, threshold: f32) -> Self {
        self.depth_threshold = clamp_f32(
            threshold,
            &limits::DEPTH_THRESHOLD,
            limits::DEFAULT_DEPTH_THRESHOLD,
        );
        self
    }

    /// Whether the host should run the effect for scene-view cameras.
    ///
    /// The compositor never reads this flag.
    #[inline]
    pub fn with_apply_to_scene_view(mut self, enabled: bool) -> Self {
        self.apply_to_scene_view = enabled;
        self
    }

    // Accessors -------------------------------------------------------------

    #[inline]
    pub fn pixel_size(&self) -> u32 {
        self.pixel_size
    }

    #[inline]
    pub fn color_count(&self) -> u32 {
        self.color_count
    }

    /// Number of steps between the darkest and brightest level (`color_count - 1`).
    #[inline]
    pub fn quantization_levels(&self) -> u32 {
        self.color_count - 1
    }

    #[inline]
    pub fn saturation(&self) -> f32 {
        self.saturation
    }

    #[inline]
    pub fn contrast(&self) -> f32 {
        self.contrast
    }

    #[inline]
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    #[inline]
    pub fn dither_enabled(&self) -> bool {
        self.dither_enabled
    }

    #[inline]
    pub fn dither_strength(&self) -> f32 {
        self.dither_strength
    }

    #[inline]
    pub fn dither_pattern(&self) -> DitherPattern {
        self.dither_pattern
    }

    #[inline]
    pub fn outline_enabled(&self) -> bool {
        self.outline_enabled
    }

    #[inline]
    pub fn outline_thickness(&self) -> f32 {
        self.outline_thickness
    }

    #[inline]
    pub fn outline_color(&self) -> Rgba {
        self.outline_color
    }

    #[inline]
    pub fn depth_threshold(&self) -> f32 {
        self.depth_threshold
    }

    #[inline]
    pub fn apply_to_scene_view(&self) -> bool {
        self.apply_to_scene_view
    }
}

/// Unvalidated deserialization target; converted through the clamping setters.
#[derive(Deserialize)]
#[serde(default)]
struct RawOptions {
    pixel_size: i64,
    color_count: i64,
    saturation: f32,
    contrast: f32,
    brightness: f32,
    dither_enabled: bool,
    dither_strength: f32,
    dither_pattern: DitherPattern,
    outline_enabled: bool,
    outline_thickness: f32,
    outline_color: Rgba,
    depth_threshold: f32,
    apply_to_scene_view: bool,
}

impl Default for RawOptions {
    fn default() -> Self {
        let d = StylizeOptions::default();
        Self {
            pixel_size: d.pixel_size.into(),
            color_count: d.color_count.into(),
            saturation: d.saturation,
            contrast: d.contrast,
            brightness: d.brightness,
            dither_enabled: d.dither_enabled,
            dither_strength: d.dither_strength,
            dither_pattern: d.dither_pattern,
            outline_enabled: d.outline_enabled,
            outline_thickness: d.outline_thickness,
            outline_color: d.outline_color,
            depth_threshold: d.depth_threshold,
            apply_to_scene_view: d.apply_to_scene_view,
        }
    }
}

impl From<RawOptions> for StylizeOptions {
    fn from(raw: RawOptions) -> Self {
        StylizeOptions::new()
            .with_pixel_size(saturate_u32(raw.pixel_size))
            .with_color_count(saturate_u32(raw.color_count))
            .with_saturation(raw.saturation)
            .with_contrast(raw.contrast)
            .with_brightness(raw.brightness)
            .with_dither(raw.dither_enabled)
            .with_dither_strength(raw.dither_strength)
            .with_dither_pattern(raw.dither_pattern)
            .with_outline(raw.outline_enabled)
            .with_outline_thickness(raw.outline_thickness)
            .with_outline_color(raw.outline_color)
            .with_depth_threshold(raw.depth_threshold)
            .with_apply_to_scene_view(raw.apply_to_scene_view)
    }
}

/// Negative or oversized integers saturate before range clamping.
fn saturate_u32(value: i64) -> u32 {
    value.clamp(0, u32::MAX.into()) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let opts = StylizeOptions::default();
        assert_eq!(opts.pixel_size(), 4);
        assert_eq!(opts.color_count(), 16);
        assert_eq!(opts.quantization_levels(), 15);
        assert!((opts.saturation() - 1.0).abs() < f32::EPSILON);
        assert!((opts.contrast() - 1.0).abs() < f32::EPSILON);
        assert!((opts.brightness() - 1.0).abs() < f32::EPSILON);
        assert!(opts.dither_enabled());
        assert!((opts.dither_strength() - 0.5).abs() < f32::EPSILON);
        assert_eq!(opts.dither_pattern(), DitherPattern::Bayer);
        assert!(opts.outline_enabled());
        assert!((opts.outline_thickness() - 1.0).abs() < f32::EPSILON);
        assert_eq!(opts.outline_color(), Rgba::BLACK);
        assert!((opts.depth_threshold() - 0.05).abs() < f32::EPSILON);
        assert!(!opts.apply_to_scene_view());
    }

    #[test]
    fn test_setters_clamp_low() {
        let opts = StylizeOptions::new()
            .with_pixel_size(0)
            .with_color_count(1)
            .with_saturation(-1.0)
            .with_contrast(0.0)
            .with_brightness(0.1)
            .with_dither_strength(-0.5)
            .with_outline_thickness(0.0)
            .with_depth_threshold(0.0);

        assert_eq!(opts.pixel_size(), 1);
        assert_eq!(opts.color_count(), 2);
        assert_eq!(opts.saturation(), 0.0);
        assert_eq!(opts.contrast(), 0.5);
        assert_eq!(opts.brightness(), 0.5);
        assert_eq!(opts.dither_strength(), 0.0);
        assert_eq!(opts.outline_thickness(), 0.5);
        assert_eq!(opts.depth_threshold(), 0.01);
    }

    #[test]
    fn test_setters_clamp_high() {
        let opts = StylizeOptions::new()
            .with_pixel_size(64)
            .with_color_count(1000)
            .with_saturation(5.0)
            .with_contrast(3.0)
            .with_brightness(9.0)
            .with_dither_strength(2.0)
            .with_outline_thickness(10.0)
            .with_depth_threshold(1.0);

        assert_eq!(opts.pixel_size(), 32);
        assert_eq!(opts.color_count(), 64);
        assert_eq!(opts.saturation(), 2.0);
        assert_eq!(opts.contrast(), 2.0);
        assert_eq!(opts.brightness(), 2.0);
        assert_eq!(opts.dither_strength(), 1.0);
        assert_eq!(opts.outline_thickness(), 4.0);
        assert_eq!(opts.depth_threshold(), 0.5);
    }

    #[test]
    fn test_nan_falls_back_to_default() {
        let opts = StylizeOptions::new()
            .with_saturation(f32::NAN)
            .with_depth_threshold(f32::NAN);
        assert_eq!(opts.saturation(), 1.0);
        assert_eq!(opts.depth_threshold(), 0.05);
    }

    #[test]
    fn test_outline_color_is_clamped() {
        let opts = StylizeOptions::new().with_outline_color(Rgba::new(2.0, -1.0, 0.5, f32::NAN));
        assert_eq!(opts.outline_color(), Rgba::new(1.0, 0.0, 0.5, 0.0));
    }

    #[test]
    fn test_passthrough_preset() {
        let opts = StylizeOptions::passthrough();
        assert_eq!(opts.pixel_size(), 1);
        assert_eq!(opts.color_count(), 64);
        assert!(!opts.dither_enabled());
        assert!(!opts.outline_enabled());
    }

    #[test]
    fn test_deserialize_partial_uses_defaults() {
        let opts: StylizeOptions = serde_yaml::from_str("pixel_size: 8\ncolor_count: 4\n").unwrap();
        assert_eq!(opts.pixel_size(), 8);
        assert_eq!(opts.color_count(), 4);
        assert_eq!(opts.outline_color(), Rgba::BLACK);
        assert!(opts.dither_enabled());
    }

    #[test]
    fn test_deserialize_clamps() {
        let yaml = r##"
pixel_size: 99
color_count: 1
saturation: 7.5
depth_threshold: 0.001
outline_color: "#FF0000"
dither_pattern: blue-noise
"##;
        let opts: StylizeOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(opts.pixel_size(), 32);
        assert_eq!(opts.color_count(), 2);
        assert_eq!(opts.saturation(), 2.0);
        assert_eq!(opts.depth_threshold(), 0.01);
        assert_eq!(opts.outline_color(), Rgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(opts.dither_pattern(), DitherPattern::BlueNoise);
    }

    #[test]
    fn test_deserialize_negative_integers_clamp() {
        let opts: StylizeOptions =
            serde_yaml::from_str("pixel_size: -3\ncolor_count: -1\n").unwrap();
        assert_eq!(opts.pixel_size(), 1);
        assert_eq!(opts.color_count(), 2);
    }

    #[test]
    fn test_serialize_round_trips() {
        let opts = StylizeOptions::new()
            .with_pixel_size(6)
            .with_outline_color(Rgba::from_u8(10, 20, 30, 255));
        let yaml = serde_yaml::to_string(&opts).unwrap();
        let back: StylizeOptions = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, opts);
    }
}
