use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, RectPrimitive, TextPrimitive};

/// Paint order of the chart surfaces, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayerKind {
    /// Painted before series ink (cursor highlight bands).
    Under,
    /// Axes and plugin `draw` ink.
    Main,
    /// Pointer capture surface (native crosshair).
    Over,
}

impl LayerKind {
    pub const CANONICAL: [LayerKind; 3] = [LayerKind::Under, LayerKind::Main, LayerKind::Over];
    pub const OVERLAYS: [LayerKind; 2] = [LayerKind::Under, LayerKind::Over];
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayerPrimitives {
    pub kind: LayerKind,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl LayerPrimitives {
    #[must_use]
    pub fn new(kind: LayerKind) -> Self {
        Self {
            kind,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Backend-agnostic scene handed to a [`crate::render::Renderer`].
///
/// Full passes carry all three layers; overlay repaints carry only `Under` and
/// `Over`, the backend keeps its last `Main` ink.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub layers: Vec<LayerPrimitives>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_layers(viewport, &LayerKind::CANONICAL)
    }

    #[must_use]
    pub fn overlay(viewport: Viewport) -> Self {
        Self::with_layers(viewport, &LayerKind::OVERLAYS)
    }

    fn with_layers(viewport: Viewport, kinds: &[LayerKind]) -> Self {
        Self {
            viewport,
            layers: kinds.iter().copied().map(LayerPrimitives::new).collect(),
        }
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> Option<&LayerPrimitives> {
        self.layers.iter().find(|layer| layer.kind == kind)
    }

    pub fn layer_mut(&mut self, kind: LayerKind) -> Option<&mut LayerPrimitives> {
        self.layers.iter_mut().find(|layer| layer.kind == kind)
    }

    /// Replaces the content of `kind`, if the frame carries that layer.
    pub fn set_layer(&mut self, primitives: LayerPrimitives) {
        if let Some(layer) = self.layer_mut(primitives.kind) {
            *layer = primitives;
        }
    }

    #[must_use]
    pub fn is_overlay_only(&self) -> bool {
        self.layer(LayerKind::Main).is_none()
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.iter().all(LayerPrimitives::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::{LayerKind, LayerPrimitives, RenderFrame};
    use crate::core::Viewport;
    use crate::render::{Color, RectPrimitive};

    #[test]
    fn full_frame_uses_canonical_layer_order() {
        let frame = RenderFrame::new(Viewport::new(10, 10));
        let kinds: Vec<LayerKind> = frame.layers.iter().map(|layer| layer.kind).collect();
        assert_eq!(kinds, vec![LayerKind::Under, LayerKind::Main, LayerKind::Over]);
        assert!(!frame.is_overlay_only());
    }

    #[test]
    fn overlay_frame_ignores_main_ink() {
        let mut frame = RenderFrame::overlay(Viewport::new(10, 10));
        let mut main = LayerPrimitives::new(LayerKind::Main);
        main.rects
            .push(RectPrimitive::new(0.0, 0.0, 1.0, 1.0, Color::rgb(1.0, 0.0, 0.0)));
        frame.set_layer(main);
        assert!(frame.is_overlay_only());
        assert!(frame.is_empty());
    }
}
