use crate::error::RenderError;
use crate::models::{FrameContext, SkipReason};
use pixel_stylize::{ColorBuffer, Compositor, DepthBuffer, StylizeOptions};

/// What happened to a frame handed to [`EffectService::process_frame`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Applied,
    Skipped(SkipReason),
}

/// Per-frame driver for the stylization pipeline
///
/// Holds the compositor built from the active profile. Frames are rendered
/// into a temporary target and copied back over the source, so a frame is
/// either fully stylized or left untouched.
pub struct EffectService {
    compositor: Compositor,
    frames_applied: u64,
}

impl EffectService {
    pub fn new(options: StylizeOptions) -> Self {
        tracing::debug!(?options, "Creating effect service");
        Self {
            compositor: Compositor::new(options),
            frames_applied: 0,
        }
    }

    pub fn options(&self) -> &StylizeOptions {
        self.compositor.options()
    }

    /// Replace the configuration; takes effect from the next frame.
    pub fn set_options(&mut self, options: StylizeOptions) {
        tracing::debug!(?options, "Updating effect options");
        self.compositor = Compositor::new(options);
    }

    /// Number of frames the pipeline has run on
    pub fn frames_applied(&self) -> u64 {
        self.frames_applied
    }

    /// Stylize `color` in place unless the frame context says to skip it.
    pub fn process_frame(
        &mut self,
        ctx: &FrameContext,
        color: &mut ColorBuffer,
        depth: &DepthBuffer,
    ) -> Result<FrameOutcome, RenderError> {
        if let Some(reason) = ctx.skip_reason(self.options()) {
            tracing::debug!(camera = ?ctx.camera, %reason, "Skipping frame");
            return Ok(FrameOutcome::Skipped(reason));
        }

        self.compositor.render_in_place(color, depth)?;
        self.frames_applied += 1;

        tracing::debug!(
            camera = ?ctx.camera,
            width = color.width(),
            height = color.height(),
            "Applied pixel outline effect"
        );
        Ok(FrameOutcome::Applied)
    }
}

impl Default for EffectService {
    fn default() -> Self {
        Self::new(StylizeOptions::default())
    }
}
