//! pixel-stylize: pixel-art post-processing for rendered frames
//!
//! This library turns one rendered color frame, plus its depth buffer, into a
//! stylized frame: blocky pixelization, a reduced per-channel palette with
//! optional ordered dithering, color adjustments and depth-based outlines.
//!
//! # Quick Start
//!
//! The [`Compositor`] is the primary entry point:
//!
//! ```
//! use pixel_stylize::{ColorBuffer, Compositor, DepthBuffer, Rgba, StylizeOptions};
//!
//! let options = StylizeOptions::new()
//!     .with_pixel_size(2)
//!     .with_color_count(8)
//!     .with_outline_color("#202020".parse().unwrap());
//!
//! let color = ColorBuffer::new(8, 8, Rgba::rgb(0.8, 0.4, 0.1)).unwrap();
//! let depth = DepthBuffer::new(8, 8, 0.5).unwrap();
//!
//! let frame = Compositor::new(options).render(&color, &depth).unwrap();
//! assert_eq!(frame.dimensions(), (8, 8));
//! ```
//!
//! # Pipeline Overview
//!
//! ```text
//! color frame                  depth frame
//!     |                             |
//!     v                             |
//! [Pixelizer]                       |
//!   block-center sampling           |
//!     |                             |
//!     v                             |
//! [Color Stylizer]                  |
//!   brightness -> contrast          |
//!   -> saturation                   |
//!   + ordered dither offset         |
//!   -> quantize to n levels         |
//!     |                             |
//!     v                             v
//! [Outline Compositor] <---- edge detection
//!   blend outline color on edges
//!     |
//!     v
//! output frame (same dimensions)
//! ```
//!
//! Every stage is a pure function of its inputs. Rows are computed in
//! parallel with rayon; the output does not depend on scheduling.
//!
//! # Configuration
//!
//! [`StylizeOptions`] clamps every value into its valid range when it is
//! built or deserialized, so there are no configuration errors. The only
//! runtime errors ([`StylizeError`]) are malformed buffers and color/depth
//! frames of different sizes.
//!
//! # Quantization
//!
//! The palette is implicit: each color channel is snapped to `color_count`
//! evenly spaced levels in 0.0..=1.0. Quantization is a projection, so
//! running the stylizer again over its own output (with neutral
//! adjustments) changes nothing, with or without dithering. See
//! [`dither`] for why the dither offset cannot break that.

pub mod api;
pub mod buffer;
pub mod color;
pub mod config;
pub mod dither;
pub mod stages;


pub use api::{Compositor, StylizeError};
pub use buffer::{ColorBuffer, DepthBuffer, EdgeMask, ImageBuffer};
pub use color::{ParseColorError, Rgba};
pub use config::StylizeOptions;
pub use dither::{DitherPattern, ParsePatternError};
pub use stages::{quantize_channel, ColorStylizer, OutlineCompositor, Pixelizer};
