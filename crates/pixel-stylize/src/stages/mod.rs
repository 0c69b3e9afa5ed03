//! The three pipeline stages, in execution order.
//!
//! 1. [`Pixelizer`]: block sampling
//! 2. [`ColorStylizer`]: brightness, contrast, saturation, dither, quantize
//! 3. [`OutlineCompositor`]: depth-edge outlines
//!
//! Each stage borrows its inputs and returns a new buffer of the same
//! dimensions. Stages hold only copies of the configuration values they
//! need, so they are cheap to build per frame and safe to share.

mod outline;
mod pixelize;
mod stylize;

pub use outline::OutlineCompositor;
pub use pixelize::Pixelizer;
pub use stylize::{quantize_channel, ColorStylizer};
