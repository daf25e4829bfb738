use serde::{Deserialize, Serialize};

use crate::core::{
    Axis, BoundingBox, HeatLadderData, IndexWindow, ResolvedScale, Viewport, column_pitch,
    value_to_pixel, x_domain_value,
};
use crate::render::{Canvas, InteractionSurface, OverlayLayer};

/// Hovered column and last pointer position.
///
/// `pointer` is in CSS pixels relative to the plot box. `index` always lies in
/// the visible window when set.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorState {
    pub index: Option<usize>,
    pub pointer: Option<(f64, f64)>,
}

/// Everything a plugin hook may look at or draw into.
///
/// Owned and mutated by the engine; plugins only borrow it for the duration
/// of a hook. The dataset has no mutable accessor.
#[derive(Debug)]
pub struct RenderContext {
    viewport: Viewport,
    pixel_ratio: f64,
    bbox: BoundingBox,
    data: HeatLadderData,
    window: Option<IndexWindow>,
    x_scale: ResolvedScale,
    y_scale: ResolvedScale,
    cursor: CursorState,
    canvas: Canvas,
    under: OverlayLayer,
    over: InteractionSurface,
}

impl RenderContext {
    pub(crate) fn new(
        viewport: Viewport,
        pixel_ratio: f64,
        bbox: BoundingBox,
        data: HeatLadderData,
        x_scale: ResolvedScale,
        y_scale: ResolvedScale,
    ) -> Self {
        let window = IndexWindow::full(data.len());
        Self {
            viewport,
            pixel_ratio,
            bbox,
            data,
            window,
            x_scale,
            y_scale,
            cursor: CursorState::default(),
            canvas: Canvas::new(),
            under: OverlayLayer::default(),
            over: InteractionSurface::default(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Device pixels per CSS pixel.
    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.pixel_ratio
    }

    #[must_use]
    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    #[must_use]
    pub fn data(&self) -> &HeatLadderData {
        &self.data
    }

    /// Visible window, `None` while the series is empty.
    #[must_use]
    pub fn window(&self) -> Option<IndexWindow> {
        self.window
    }

    #[must_use]
    pub fn x_scale(&self) -> ResolvedScale {
        self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> ResolvedScale {
        self.y_scale
    }

    #[must_use]
    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    #[must_use]
    pub fn cursor_index(&self) -> Option<usize> {
        self.cursor.index
    }

    #[must_use]
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    #[must_use]
    pub fn under(&self) -> &OverlayLayer {
        &self.under
    }

    pub fn under_mut(&mut self) -> &mut OverlayLayer {
        &mut self.under
    }

    #[must_use]
    pub fn over(&self) -> &InteractionSurface {
        &self.over
    }

    pub fn over_mut(&mut self) -> &mut InteractionSurface {
        &mut self.over
    }

    /// Canvas x of column `index`'s center.
    #[must_use]
    pub fn x_pixel_at(&self, index: usize) -> Option<f64> {
        let value = x_domain_value(self.x_scale.distribution, index, &self.data.series)?;
        value_to_pixel(value, Axis::X, &self.x_scale, self.bbox)
    }

    /// Canvas y of a value on the ladder axis.
    #[must_use]
    pub fn y_pixel_of(&self, value: f64) -> Option<f64> {
        value_to_pixel(value, Axis::Y, &self.y_scale, self.bbox)
    }

    /// Distance between adjacent column centers in device pixels.
    #[must_use]
    pub fn column_pitch(&self) -> Option<f64> {
        self.window.map(|window| column_pitch(window, self.bbox))
    }

    pub(crate) fn replace_data(&mut self, data: HeatLadderData) {
        self.window = IndexWindow::full(data.len());
        self.data = data;
        self.cursor.index = None;
    }

    pub(crate) fn set_window(&mut self, window: IndexWindow) {
        self.window = Some(window);
        if self.cursor.index.is_some_and(|index| !window.contains(index)) {
            self.cursor.index = None;
        }
    }

    pub(crate) fn set_scales(&mut self, x_scale: ResolvedScale, y_scale: ResolvedScale) {
        self.x_scale = x_scale;
        self.y_scale = y_scale;
    }

    pub(crate) fn set_cursor(&mut self, cursor: CursorState) {
        self.cursor = cursor;
    }

    pub(crate) fn surfaces_mut(&mut self) -> (&mut OverlayLayer, &mut InteractionSurface) {
        (&mut self.under, &mut self.over)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::RenderContext;
    use crate::core::{
        BoundingBox, ColorRange, Distribution, HeatLadderData, IndexWindow, ResolvedScale,
        Viewport,
    };

    fn context() -> RenderContext {
        let data = HeatLadderData::from_vecs(
            vec![100.0, 110.0, 120.0],
            vec![vec![1.0], vec![2.0], vec![3.0]],
            vec![vec![1.0], vec![1.0], vec![1.0]],
            ColorRange::new(0.0, 1.0).expect("range"),
        );
        RenderContext::new(
            Viewport::new(300, 200),
            1.0,
            BoundingBox::new(0.0, 0.0, 200.0, 100.0),
            data,
            ResolvedScale::new(Distribution::Linear, Some((100.0, 120.0))),
            ResolvedScale::new(Distribution::Linear, Some((1.0, 3.0))),
        )
    }

    #[test]
    fn column_helpers_follow_linear_series() {
        let ctx = context();
        assert_relative_eq!(ctx.x_pixel_at(1).expect("x"), 100.0);
        assert_relative_eq!(ctx.column_pitch().expect("pitch"), 100.0);
        assert_relative_eq!(ctx.y_pixel_of(3.0).expect("y"), 0.0);
        assert!(ctx.x_pixel_at(7).is_none());
    }

    #[test]
    fn narrowing_window_drops_cursor_outside_it() {
        let mut ctx = context();
        ctx.set_cursor(super::CursorState {
            index: Some(0),
            pointer: Some((1.0, 1.0)),
        });
        ctx.set_window(IndexWindow::new(1, 2, 3).expect("window"));
        assert_eq!(ctx.cursor_index(), None);
    }
}
