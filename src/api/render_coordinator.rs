use tracing::{debug, trace};

use crate::error::ChartResult;
use crate::render::{LayerKind, LayerPrimitives, RectPrimitive, RenderFrame, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Full draw pass: scales, base axes, every plugin `draw`, then a complete
    /// frame handed to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        self.resolve_scales();
        self.ctx.canvas_mut().clear();
        self.draw_base_axes();
        self.run_draw_hooks()?;

        let mut frame = RenderFrame::new(self.ctx.viewport());
        frame.set_layer(self.under_primitives());
        frame.set_layer(self.ctx.canvas().ink().clone());
        frame.set_layer(self.over_primitives());
        debug!(
            rects = self.ctx.canvas().ink().rects.len(),
            texts = self.ctx.canvas().ink().texts.len(),
            "render full pass"
        );
        self.renderer.render(&frame)?;
        self.mark_overlays_clean();
        Ok(())
    }

    /// Repaints `under` and `over` when either changed since the last paint.
    ///
    /// Returns whether a repaint was issued.
    pub(super) fn repaint_overlays_if_dirty(&mut self) -> ChartResult<bool> {
        if !self.ctx.under().is_dirty() && !self.ctx.over().is_dirty() {
            return Ok(false);
        }

        let mut frame = RenderFrame::overlay(self.ctx.viewport());
        frame.set_layer(self.under_primitives());
        frame.set_layer(self.over_primitives());
        trace!("render overlay repaint");
        self.renderer.render_overlay(&frame)?;
        self.mark_overlays_clean();
        Ok(true)
    }

    /// Visible `under` elements as device-pixel rectangles spanning the plot
    /// height.
    fn under_primitives(&self) -> LayerPrimitives {
        let bbox = self.ctx.bbox();
        let ratio = self.ctx.pixel_ratio();
        let mut layer = LayerPrimitives::new(LayerKind::Under);
        for element in self.ctx.under().elements().iter().filter(|e| e.visible) {
            let fill = element
                .class_name
                .as_deref()
                .and_then(|class_name| self.options.overlay_styles.get(class_name))
                .copied()
                .unwrap_or(element.fill);
            layer.rects.push(RectPrimitive::new(
                bbox.left + element.translate_x * ratio,
                bbox.top,
                element.width * ratio,
                bbox.height,
                fill,
            ));
        }
        layer
    }

    fn over_primitives(&self) -> LayerPrimitives {
        let mut layer = LayerPrimitives::new(LayerKind::Over);
        layer.lines.extend_from_slice(self.ctx.over().crosshair());
        layer
    }

    fn mark_overlays_clean(&mut self) {
        let (under, over) = self.ctx.surfaces_mut();
        under.mark_clean();
        over.mark_clean();
    }
}
