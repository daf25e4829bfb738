use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// Frames are still validated, and the last full and overlay frames are kept
/// so tests can inspect exactly what a real backend would have painted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub full_passes: usize,
    pub overlay_repaints: usize,
    last_frame: Option<RenderFrame>,
    last_overlay: Option<RenderFrame>,
}

impl NullRenderer {
    #[must_use]
    pub fn last_frame(&self) -> Option<&RenderFrame> {
        self.last_frame.as_ref()
    }

    #[must_use]
    pub fn last_overlay(&self) -> Option<&RenderFrame> {
        self.last_overlay.as_ref()
    }
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.full_passes += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }

    fn render_overlay(&mut self, overlay: &RenderFrame) -> ChartResult<()> {
        overlay.validate()?;
        self.overlay_repaints += 1;
        self.last_overlay = Some(overlay.clone());
        Ok(())
    }
}
