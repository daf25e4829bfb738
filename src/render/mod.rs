mod canvas;
mod context;
mod frame;
mod null_renderer;
mod overlay;
mod primitives;

pub use canvas::{Canvas, CanvasScope, CanvasState};
pub use context::{CursorState, RenderContext};
pub use frame::{LayerKind, LayerPrimitives, RenderFrame};
pub use null_renderer::NullRenderer;
pub use overlay::{InteractionSurface, OverlayElement, OverlayHandle, OverlayLayer};
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive};

use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive fully materialized frames so drawing code stays isolated
/// from the chart's data, scales and plugins.
pub trait Renderer {
    /// Paints a full pass (`Under`, `Main`, `Over`).
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;

    /// Repaints the overlay layers only, keeping the last `Main` ink.
    fn render_overlay(&mut self, overlay: &RenderFrame) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoRenderStats, CairoRenderer};
