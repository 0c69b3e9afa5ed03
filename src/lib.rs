//! pixel-outline - pixel-art post-processing for rendered frames
//!
//! Wraps the `pixel-stylize` pipeline with profile configuration, frame
//! gating and PNG I/O. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
