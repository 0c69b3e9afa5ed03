use pixel_stylize::StylizeOptions;
use std::fmt;

/// Which kind of camera produced the frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum CameraKind {
    /// Regular in-game camera
    #[default]
    Game,
    /// Editor scene view
    SceneView,
    /// Asset preview camera
    Preview,
}

/// Per-frame facts the effect uses to decide whether it runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameContext {
    pub camera: CameraKind,

    /// The frame targets the window back buffer directly
    pub target_is_backbuffer: bool,
}

/// Why a frame was passed through untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    SceneView,
    BackBufferTarget,
}

impl FrameContext {
    pub fn new(camera: CameraKind) -> Self {
        Self {
            camera,
            target_is_backbuffer: false,
        }
    }

    pub fn with_backbuffer_target(mut self, backbuffer: bool) -> Self {
        self.target_is_backbuffer = backbuffer;
        self
    }

    /// `None` when the effect should run on this frame.
    pub fn skip_reason(&self, options: &StylizeOptions) -> Option<SkipReason> {
        if self.camera == CameraKind::SceneView && !options.apply_to_scene_view() {
            return Some(SkipReason::SceneView);
        }
        if self.target_is_backbuffer {
            return Some(SkipReason::BackBufferTarget);
        }
        None
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::SceneView => write!(f, "scene view camera"),
            SkipReason::BackBufferTarget => write!(f, "target is the back buffer"),
        }
    }
}
