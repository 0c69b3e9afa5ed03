//! Public API for the pixel-stylize crate.
//!
//! This module provides the high-level API: the [`Compositor`] pipeline and
//! the [`StylizeError`] error type.

mod builder;
mod error;

pub use builder::Compositor;
pub use error::StylizeError;
