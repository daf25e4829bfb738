use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::ColorRange;
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::render::{Color, RectPrimitive, RenderContext};

pub const HEAT_LADDER_PLUGIN_ID: &str = "heat-ladder";

const CELL_RED: u8 = 50;
const CELL_GREEN: u8 = 50;
const CELL_ALPHA: f64 = 0.5;

/// Weight relative to the top of the color range, clamped to `[0, 1]`.
///
/// A non-positive range maximum maps every weight to zero.
#[must_use]
pub fn heat_intensity(weight: f64, color_range: ColorRange) -> f64 {
    let max = color_range.max();
    if max <= 0.0 || !weight.is_finite() {
        return 0.0;
    }
    (weight / max).clamp(0.0, 1.0)
}

/// Blue channel of a ladder cell, `round(255 * intensity)`.
#[must_use]
pub fn heat_blue_channel(weight: f64, color_range: ColorRange) -> u8 {
    (255.0 * heat_intensity(weight, color_range)).round() as u8
}

/// Fill of a ladder cell: `rgba(50, 50, blue, 0.5)`.
#[must_use]
pub fn heat_fill_color(weight: f64, color_range: ColorRange) -> Color {
    Color::from_rgba8(
        CELL_RED,
        CELL_GREEN,
        heat_blue_channel(weight, color_range),
        CELL_ALPHA,
    )
}

/// One rung rectangle as it will be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LadderCell {
    pub index: usize,
    pub rung: f64,
    pub weight: f64,
    pub rect: RectPrimitive,
}

/// Draw parameters, all in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatLadderStyle {
    pub gap: f64,
    pub body_max_width: f64,
    pub cell_height: f64,
    /// Accepted for configuration compatibility; not painted.
    pub shadow_color: Color,
}

impl Default for HeatLadderStyle {
    fn default() -> Self {
        Self {
            gap: 2.0,
            body_max_width: 50.0,
            cell_height: 5.0,
            shadow_color: Color::rgb(0.0, 0.0, 0.0),
        }
    }
}

/// Paints every visible column as a stack of fixed-height cells, one per rung,
/// colored by the rung's weight.
#[derive(Debug, Clone)]
pub struct HeatLadderPlugin {
    id: String,
    style: HeatLadderStyle,
}

impl Default for HeatLadderPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl HeatLadderPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: HEAT_LADDER_PLUGIN_ID.to_owned(),
            style: HeatLadderStyle::default(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: HeatLadderStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn style(&self) -> HeatLadderStyle {
        self.style
    }

    /// Body width for a given column pitch, never negative.
    #[must_use]
    pub fn body_width(&self, column_width: f64) -> f64 {
        self.style
            .body_max_width
            .min(column_width - self.style.gap)
            .max(0.0)
    }

    /// Cells for the visible window without touching the canvas.
    #[must_use]
    pub fn layout(&self, ctx: &RenderContext) -> Vec<LadderCell> {
        let (Some(window), Some(column_width)) = (ctx.window(), ctx.column_pitch()) else {
            return Vec::new();
        };
        let body_width = self.body_width(column_width);
        let data = ctx.data();
        let color_range = data.color_range;

        let mut cells = Vec::new();
        for index in window.indices() {
            let Some(center) = ctx.x_pixel_at(index) else {
                continue;
            };
            let body_x = center - body_width / 2.0;

            for (&rung, &weight) in data.rungs_at(index).iter().zip(data.weights_at(index)) {
                let Some(y) = ctx.y_pixel_of(rung) else {
                    continue;
                };
                cells.push(LadderCell {
                    index,
                    rung,
                    weight,
                    rect: RectPrimitive::new(
                        body_x,
                        y,
                        body_width,
                        self.style.cell_height,
                        heat_fill_color(weight, color_range),
                    ),
                });
            }
        }
        cells
    }
}

impl ChartPlugin for HeatLadderPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn draw(&mut self, ctx: &mut RenderContext) -> ChartResult<()> {
        let cells = self.layout(ctx);
        trace!(plugin = %self.id, cells = cells.len(), "drawing heat ladder");

        let mut canvas = ctx.canvas_mut().save_scope();
        for cell in &cells {
            let rect = cell.rect;
            canvas.set_fill_style(rect.fill);
            canvas.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{HeatLadderPlugin, heat_blue_channel, heat_intensity};
    use crate::core::{
        BoundingBox, ColorRange, Distribution, HeatLadderData, ResolvedScale, Viewport,
    };
    use crate::extensions::ChartPlugin;
    use crate::render::RenderContext;

    fn color_range() -> ColorRange {
        ColorRange::new(10.0, 256.0).expect("range")
    }

    fn context() -> RenderContext {
        let data = HeatLadderData::from_vecs(
            vec![0.0, 1.0, 2.0],
            vec![vec![10.0, 20.0], vec![30.0], vec![40.0, 50.0, 60.0]],
            vec![vec![10.0, 20.0], vec![128.0], vec![0.0, 256.0, 512.0]],
            color_range(),
        );
        RenderContext::new(
            Viewport::new(400, 300),
            1.0,
            BoundingBox::new(50.0, 20.0, 300.0, 200.0),
            data,
            ResolvedScale::new(Distribution::Linear, Some((0.0, 2.0))),
            ResolvedScale::new(Distribution::Linear, Some((10.0, 60.0))),
        )
    }

    #[test]
    fn intensity_is_clamped_to_unit_range() {
        assert_relative_eq!(heat_intensity(128.0, color_range()), 0.5);
        assert_relative_eq!(heat_intensity(-3.0, color_range()), 0.0);
        assert_relative_eq!(heat_intensity(1000.0, color_range()), 1.0);
        assert_eq!(heat_blue_channel(256.0, color_range()), 255);
        assert_eq!(heat_blue_channel(1.0, ColorRange::default()), 0);
    }

    #[test]
    fn body_width_is_capped_and_never_negative() {
        let plugin = HeatLadderPlugin::new();
        assert_relative_eq!(plugin.body_width(300.0), 50.0);
        assert_relative_eq!(plugin.body_width(20.0), 18.0);
        assert_relative_eq!(plugin.body_width(1.0), 0.0);
    }

    #[test]
    fn layout_emits_one_cell_per_rung() {
        let ctx = context();
        let cells = HeatLadderPlugin::new().layout(&ctx);
        let per_column: Vec<usize> = (0..3)
            .map(|index| cells.iter().filter(|cell| cell.index == index).count())
            .collect();
        assert_eq!(per_column, vec![2, 1, 3]);

        let top = cells.iter().find(|cell| cell.rung == 60.0).expect("top rung");
        assert_relative_eq!(top.rect.y, 20.0);
        assert_relative_eq!(top.rect.center_x(), 350.0);
        assert_relative_eq!(top.rect.height, 5.0);
    }

    #[test]
    fn draw_leaves_canvas_state_balanced() {
        let mut ctx = context();
        let before = ctx.canvas().state();
        HeatLadderPlugin::new().draw(&mut ctx).expect("draw");
        assert_eq!(ctx.canvas().save_depth(), 0);
        assert_eq!(ctx.canvas().state(), before);
        assert_eq!(ctx.canvas().ink().rects.len(), 6);
    }
}
