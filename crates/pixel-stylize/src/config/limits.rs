//! Valid ranges and defaults for every configuration field.

use std::ops::RangeInclusive;

pub const PIXEL_SIZE: RangeInclusive<u32> = 1..=32;
pub const COLOR_COUNT: RangeInclusive<u32> = 2..=64;
pub const SATURATION: RangeInclusive<f32> = 0.0..=2.0;
pub const CONTRAST: RangeInclusive<f32> = 0.5..=2.0;
pub const BRIGHTNESS: RangeInclusive<f32> = 0.5..=2.0;
pub const DITHER_STRENGTH: RangeInclusive<f32> = 0.0..=1.0;
pub const OUTLINE_THICKNESS: RangeInclusive<f32> = 0.5..=4.0;
pub const DEPTH_THRESHOLD: RangeInclusive<f32> = 0.01..=0.5;

pub const DEFAULT_PIXEL_SIZE: u32 = 4;
pub const DEFAULT_COLOR_COUNT: u32 = 16;
pub const DEFAULT_SATURATION: f32 = 1.0;
pub const DEFAULT_CONTRAST: f32 = 1.0;
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;
pub const DEFAULT_DITHER_STRENGTH: f32 = 0.5;
pub const DEFAULT_OUTLINE_THICKNESS: f32 = 1.0;
pub const DEFAULT_DEPTH_THRESHOLD: f32 = 0.05;

/// Clamp an integer into `range`.
#[inline]
pub fn clamp_u32(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// Clamp a float into `range`; NaN becomes `fallback`.
#[inline]
pub fn clamp_f32(value: f32, range: &RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_lie_inside_ranges() {
        assert!(PIXEL_SIZE.contains(&DEFAULT_PIXEL_SIZE));
        assert!(COLOR_COUNT.contains(&DEFAULT_COLOR_COUNT));
        assert!(SATURATION.contains(&DEFAULT_SATURATION));
        assert!(CONTRAST.contains(&DEFAULT_CONTRAST));
        assert!(BRIGHTNESS.contains(&DEFAULT_BRIGHTNESS));
        assert!(DITHER_STRENGTH.contains(&DEFAULT_DITHER_STRENGTH));
        assert!(OUTLINE_THICKNESS.contains(&DEFAULT_OUTLINE_THICKNESS));
        assert!(DEPTH_THRESHOLD.contains(&DEFAULT_DEPTH_THRESHOLD));
    }

    #[test]
    fn test_clamp_f32_nan_uses_fallback() {
        assert_eq!(clamp_f32(f32::NAN, &CONTRAST, 1.0), 1.0);
        assert_eq!(clamp_f32(f32::INFINITY, &CONTRAST, 1.0), 2.0);
        assert_eq!(clamp_f32(-3.0, &CONTRAST, 1.0), 0.5);
    }

    #[test]
    fn test_clamp_u32() {
        assert_eq!(clamp_u32(0, &PIXEL_SIZE), 1);
        assert_eq!(clamp_u32(100, &COLOR_COUNT), 64);
        assert_eq!(clamp_u32(8, &PIXEL_SIZE), 8);
    }
}
