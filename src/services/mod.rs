pub mod effect;

pub use effect::{EffectService, FrameOutcome};
