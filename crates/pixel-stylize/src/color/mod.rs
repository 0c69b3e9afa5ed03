//! Color types
//!
//! Channels are stored as `f32` in the 0.0..=1.0 range, in the same encoding
//! as the frame they came from. All stylization arithmetic (brightness,
//! contrast, saturation, quantization, outline blending) is done on these
//! values directly.
//!
//! # Example
//!
//! ```
//! use pixel_stylize::Rgba;
//!
//! let orange: Rgba = "#FF8000".parse().unwrap();
//! assert_eq!(orange.to_bytes(), [255, 128, 0, 255]);
//! ```

mod error;
mod rgba;

pub use error::ParseColorError;
pub use rgba::Rgba;
