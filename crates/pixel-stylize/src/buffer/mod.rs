//! Image buffers passed between pipeline stages.
//!
//! [`ImageBuffer`] is a row-major 2D grid with fixed dimensions. Stages never
//! write into a buffer they did not create: each one returns a freshly owned
//! buffer, so the source frame and the depth buffer can be shared read-only
//! while rows are computed in parallel.
//!
//! - [`ColorBuffer`]: RGBA frame data
//! - [`DepthBuffer`]: one normalized depth sample per pixel
//! - [`EdgeMask`]: outline coverage computed from a depth buffer

mod image_buffer;

pub use image_buffer::{ensure_matching, ColorBuffer, DepthBuffer, EdgeMask, ImageBuffer};
