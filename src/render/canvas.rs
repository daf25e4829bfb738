use std::ops::{Deref, DerefMut};

use crate::render::{
    Color, LayerKind, LayerPrimitives, LinePrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

/// Mutable drawing state, saved and restored as a unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasState {
    pub fill: Color,
    pub stroke: Color,
    pub line_width: f64,
    pub font_size_px: f64,
    pub text_align: TextHAlign,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            fill: Color::rgb(0.0, 0.0, 0.0),
            stroke: Color::rgb(0.0, 0.0, 0.0),
            line_width: 1.0,
            font_size_px: 12.0,
            text_align: TextHAlign::Left,
        }
    }
}

/// Recording 2-D canvas shared by the base chart and every plugin `draw`.
///
/// Drawing calls capture the current state into primitives of the main layer.
/// Style changes must be bracketed by [`Canvas::save`]/[`Canvas::restore`],
/// most conveniently through [`Canvas::save_scope`].
#[derive(Debug)]
pub struct Canvas {
    state: CanvasState,
    stack: Vec<CanvasState>,
    ink: LayerPrimitives,
}

impl Canvas {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CanvasState::default(),
            stack: Vec::new(),
            ink: LayerPrimitives::new(LayerKind::Main),
        }
    }

    #[must_use]
    pub fn state(&self) -> CanvasState {
        self.state
    }

    /// Number of outstanding `save` calls.
    #[must_use]
    pub fn save_depth(&self) -> usize {
        self.stack.len()
    }

    pub fn save(&mut self) {
        self.stack.push(self.state);
    }

    /// Pops the last saved state. Returns `false` when nothing was saved.
    pub fn restore(&mut self) -> bool {
        match self.stack.pop() {
            Some(state) => {
                self.state = state;
                true
            }
            None => false,
        }
    }

    /// Saves state now and restores it when the returned guard drops.
    pub fn save_scope(&mut self) -> CanvasScope<'_> {
        self.save();
        CanvasScope { canvas: self }
    }

    pub fn set_fill_style(&mut self, color: Color) {
        self.state.fill = color;
    }

    pub fn set_stroke_style(&mut self, color: Color) {
        self.state.stroke = color;
    }

    pub fn set_line_width(&mut self, width: f64) {
        self.state.line_width = width;
    }

    pub fn set_font_size(&mut self, font_size_px: f64) {
        self.state.font_size_px = font_size_px;
    }

    pub fn set_text_align(&mut self, align: TextHAlign) {
        self.state.text_align = align;
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.ink
            .rects
            .push(RectPrimitive::new(x, y, width, height, self.state.fill));
    }

    pub fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.ink.lines.push(LinePrimitive::new(
            x1,
            y1,
            x2,
            y2,
            self.state.line_width,
            self.state.stroke,
        ));
    }

    pub fn fill_text(&mut self, text: impl Into<String>, x: f64, y: f64) {
        self.ink.texts.push(TextPrimitive::new(
            text,
            x,
            y,
            self.state.font_size_px,
            self.state.fill,
            self.state.text_align,
        ));
    }

    #[must_use]
    pub fn ink(&self) -> &LayerPrimitives {
        &self.ink
    }

    /// Restores the default drawing state, dropping leftover saved states.
    /// Returns how many saves were unbalanced.
    pub(crate) fn reset_state(&mut self) -> usize {
        let leaked = self.stack.len();
        self.state = CanvasState::default();
        self.stack.clear();
        leaked
    }

    /// Clears ink and drawing state for a new pass.
    pub(crate) fn clear(&mut self) {
        self.reset_state();
        self.ink = LayerPrimitives::new(LayerKind::Main);
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard returned by [`Canvas::save_scope`].
pub struct CanvasScope<'a> {
    canvas: &'a mut Canvas,
}

impl Deref for CanvasScope<'_> {
    type Target = Canvas;

    fn deref(&self) -> &Canvas {
        self.canvas
    }
}

impl DerefMut for CanvasScope<'_> {
    fn deref_mut(&mut self) -> &mut Canvas {
        self.canvas
    }
}

impl Drop for CanvasScope<'_> {
    fn drop(&mut self) {
        self.canvas.restore();
    }
}
