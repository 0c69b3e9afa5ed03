pub mod config;
pub mod frame;

pub use config::AppConfig;
pub use frame::{CameraKind, FrameContext, SkipReason};
