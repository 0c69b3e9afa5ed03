//! RGBA color type

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// Rec. 709 luma weights.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// A color with straight (non-premultiplied) alpha.
///
/// Values are in the range 0.0..=1.0 (mapping to 0..255 for 8-bit).
/// Intermediate results may leave that range; stages clamp before they
/// hand a buffer on.
///
/// Serializes as a hex string (`#RRGGBB`, or `#RRGGBBAA` when not opaque).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    /// Red channel (0.0..=1.0)
    pub r: f32,
    /// Green channel (0.0..=1.0)
    pub g: f32,
    /// Blue channel (0.0..=1.0)
    pub b: f32,
    /// Alpha channel (0.0..=1.0, 1.0 = opaque)
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    /// Create a new color from float channels.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from float channels.
    #[inline]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Create a color from 8-bit channel values.
    ///
    /// # Example
    /// ```
    /// use pixel_stylize::Rgba;
    /// let red = Rgba::from_u8(255, 0, 0, 255);
    /// assert_eq!(red.r, 1.0);
    /// assert_eq!(red.a, 1.0);
    /// ```
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create a color from a byte array [R, G, B, A].
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::from_u8(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    ///
    /// Rounds and clamps values to the 0..=255 range.
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// Relative luminance of the color channels (Rec. 709 weights).
    #[inline]
    pub fn luminance(self) -> f32 {
        LUMA_R * self.r + LUMA_G * self.g + LUMA_B * self.b
    }

    /// Linear interpolation of all four channels toward `other`.
    ///
    /// `t = 0.0` returns `self`, `t = 1.0` returns `other`.
    #[inline]
    pub fn lerp(self, other: Rgba, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Apply `f` to the three color channels, leaving alpha untouched.
    #[inline]
    pub fn map_rgb(self, f: impl Fn(f32) -> f32) -> Self {
        Self {
            r: f(self.r),
            g: f(self.g),
            b: f(self.b),
            a: self.a,
        }
    }

    /// Clamp every channel into 0.0..=1.0.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Hex representation, `#RRGGBB` for opaque colors and `#RRGGBBAA` otherwise.
    pub fn to_hex(self) -> String {
        let [r, g, b, a] = self.to_bytes();
        if a == 255 {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }
}

#[inline]
fn channel_to_u8(value: f32) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA`; the hash is
    /// optional. Parsing is case-insensitive and surrounding whitespace is
    /// trimmed. Shorthand digits expand by repetition (`F` -> `FF`).
    ///
    /// # Examples
    ///
    /// ```
    /// use pixel_stylize::Rgba;
    ///
    /// let white: Rgba = "#FFF".parse().unwrap();
    /// assert_eq!(white, Rgba::WHITE);
    ///
    /// let glass: Rgba = "00000080".parse().unwrap();
    /// assert!((glass.a - 128.0 / 255.0).abs() < 1e-6);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        // Signs and non-ASCII never reach the digit decoding below
        if let Some(bad) = s.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidHex(bad));
        }

        let digit = |i: usize| hex_value(s.as_bytes()[i]);
        let short = |i: usize| digit(i) * 17;
        let long = |i: usize| digit(i) * 16 + digit(i + 1);

        match s.len() {
            3 => Ok(Self::from_u8(short(0), short(1), short(2), 255)),
            4 => Ok(Self::from_u8(short(0), short(1), short(2), short(3))),
            6 => Ok(Self::from_u8(long(0), long(2), long(4), 255)),
            8 => Ok(Self::from_u8(long(0), long(2), long(4), long(6))),
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

/// Value of an ASCII hex digit already checked with `is_ascii_hexdigit`.
#[inline]
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}

impl TryFrom<String> for Rgba {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}
