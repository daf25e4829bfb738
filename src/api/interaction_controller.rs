use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Axis, BoundingBox, Distribution, pixel_to_value};
use crate::error::ChartResult;
use crate::render::{CursorState, LinePrimitive, Renderer};

use super::ChartEngine;

const HIT_TOLERANCE_PX: f64 = 1e-6;

/// Drill-down target under the pointer.
///
/// `time_start..time_end` spans the hovered column up to the next one; the
/// last column reuses the preceding spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LadderSelection {
    pub index: usize,
    pub time_start: f64,
    pub time_end: f64,
    pub value: f64,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn cursor(&self) -> CursorState {
        self.ctx.cursor()
    }

    /// Pointer entered the plot: shows hover-bound overlay elements when a
    /// column is already hovered.
    pub fn pointer_enter(&mut self) -> ChartResult<()> {
        self.set_hovered(true);
        self.repaint_overlays_if_dirty()?;
        Ok(())
    }

    /// Pointer moved to `(x, y)`, CSS pixels relative to the plot box.
    ///
    /// Returns the hovered index; positions outside the plot or the visible
    /// window clear it.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> ChartResult<Option<usize>> {
        if !self.ctx.over().is_hovered() {
            self.set_hovered(true);
        }

        let index = self.index_at(x, y);
        let previous = self.ctx.cursor_index();
        if previous != index {
            trace!(from = ?previous, to = ?index, "cursor index changed");
        }
        self.ctx.set_cursor(CursorState {
            index,
            pointer: Some((x, y)),
        });
        self.update_crosshair(x, y);

        self.run_set_cursor_hooks()?;
        self.repaint_overlays_if_dirty()?;
        Ok(index)
    }

    /// Pointer left the plot: clears the cursor and hides hover-bound
    /// elements.
    pub fn pointer_leave(&mut self) -> ChartResult<()> {
        self.ctx.set_cursor(CursorState::default());
        self.set_hovered(false);
        self.ctx.over_mut().set_crosshair(Vec::new());

        self.run_set_cursor_hooks()?;
        self.repaint_overlays_if_dirty()?;
        Ok(())
    }

    /// Column, time span and ladder value under `(x, y)`.
    #[must_use]
    pub fn select_at(&self, x: f64, y: f64) -> Option<LadderSelection> {
        let index = self.index_at(x, y)?;
        let series = &self.ctx.data().series;
        let time_start = *series.get(index)?;
        let time_end = match series.get(index + 1) {
            Some(&next) => next,
            None => match index.checked_sub(1).and_then(|prev| series.get(prev)) {
                Some(&prev) => time_start + (time_start - prev),
                None => time_start,
            },
        };

        let bbox = self.ctx.bbox();
        let canvas_y = bbox.top + y * self.ctx.pixel_ratio();
        let value = pixel_to_value(canvas_y, Axis::Y, &self.ctx.y_scale(), bbox)?;

        Some(LadderSelection {
            index,
            time_start,
            time_end,
            value,
        })
    }

    /// Hovered column for a pointer position, `None` outside the plot.
    #[must_use]
    pub fn index_at(&self, x: f64, y: f64) -> Option<usize> {
        let window = self.ctx.window()?;
        let bbox = self.ctx.bbox();
        let ratio = self.ctx.pixel_ratio();
        let canvas_x = bbox.left + x * ratio;
        let canvas_y = bbox.top + y * ratio;
        if !inside_plot(bbox, canvas_x, canvas_y) {
            return None;
        }

        let x_scale = self.ctx.x_scale();
        let value = pixel_to_value(canvas_x, Axis::X, &x_scale, bbox)?;
        let index = match x_scale.distribution {
            Distribution::Ordinal => {
                let nearest = value.round().max(0.0) as usize;
                window.clamp(nearest)
            }
            Distribution::Linear => {
                let series = &self.ctx.data().series;
                window
                    .indices()
                    .min_by_key(|&index| OrderedFloat((series[index] - value).abs()))?
            }
        };
        Some(index)
    }

    fn set_hovered(&mut self, hovered: bool) {
        let cursor_index = self.ctx.cursor_index();
        let (under, over) = self.ctx.surfaces_mut();
        over.set_hovered(hovered, cursor_index, under);
    }

    fn update_crosshair(&mut self, x: f64, y: f64) {
        let cursor = self.options.cursor;
        let bbox = self.ctx.bbox();
        let ratio = self.ctx.pixel_ratio();
        let canvas_x = bbox.left + x * ratio;
        let canvas_y = bbox.top + y * ratio;
        let inside = inside_plot(bbox, canvas_x, canvas_y);

        let mut lines = Vec::with_capacity(2);
        if inside && cursor.x {
            lines.push(LinePrimitive::new(
                canvas_x,
                bbox.top,
                canvas_x,
                bbox.bottom(),
                ratio,
                cursor.stroke,
            ));
        }
        if inside && cursor.y {
            lines.push(LinePrimitive::new(
                bbox.left,
                canvas_y,
                bbox.right(),
                canvas_y,
                ratio,
                cursor.stroke,
            ));
        }
        self.ctx.over_mut().set_crosshair(lines);
    }
}

fn inside_plot(bbox: BoundingBox, canvas_x: f64, canvas_y: f64) -> bool {
    canvas_x >= bbox.left - HIT_TOLERANCE_PX
        && canvas_x <= bbox.right() + HIT_TOLERANCE_PX
        && canvas_y >= bbox.top - HIT_TOLERANCE_PX
        && canvas_y <= bbox.bottom() + HIT_TOLERANCE_PX
}
