//! Stylization configuration.
//!
//! [`StylizeOptions`] is the single immutable parameter set for one render.
//! Every construction path (builder setters, deserialization) clamps its
//! inputs into the ranges listed in [`limits`], so a `StylizeOptions` value
//! is always valid and the stages never re-check it.

pub mod limits;
mod options;

pub use options::StylizeOptions;
