use crate::core::format_time_label;
use crate::render::{Color, RenderContext, Renderer, TextHAlign};

use super::{ChartEngine, ChartOptions, X_SCALE};

const AXIS_TIME_TARGET_SPACING_PX: f64 = 160.0;
const AXIS_VALUE_TARGET_SPACING_PX: f64 = 48.0;
const AXIS_MIN_TICKS: usize = 2;
const AXIS_MAX_TICKS: usize = 12;
const AXIS_FONT_PX: f64 = 11.0;
const TITLE_FONT_PX: f64 = 16.0;
const AXIS_LABEL_OFFSET_PX: f64 = 6.0;
const AXIS_COLOR: Color = Color::rgba(0.2, 0.2, 0.2, 1.0);

impl<R: Renderer> ChartEngine<R> {
    /// Base chart ink drawn before any plugin `draw`.
    pub(super) fn draw_base_axes(&mut self) {
        draw_axes(&self.options, &mut self.ctx);
    }
}

fn axis_tick_target_count(axis_span_px: f64, target_spacing_px: f64) -> usize {
    if !axis_span_px.is_finite() || axis_span_px <= 0.0 {
        return AXIS_MIN_TICKS;
    }
    let raw = (axis_span_px / target_spacing_px).floor() as usize + 1;
    raw.clamp(AXIS_MIN_TICKS, AXIS_MAX_TICKS)
}

fn format_value_label(value: f64, step: f64) -> String {
    let precision = if step.abs() >= 1.0 || step == 0.0 {
        0
    } else {
        (-step.abs().log10().floor()) as usize
    };
    format!("{value:.precision$}")
}

fn draw_axes(options: &ChartOptions, ctx: &mut RenderContext) {
    let bbox = ctx.bbox();
    let ratio = ctx.pixel_ratio();
    let viewport = ctx.viewport();

    let mut x_labels = Vec::new();
    if let Some(window) = ctx.window() {
        let ticks = axis_tick_target_count(bbox.width, AXIS_TIME_TARGET_SPACING_PX * ratio);
        let step = window.count().div_ceil(ticks).max(1);
        let time_axis = options.scales.get(X_SCALE).is_some_and(|scale| scale.time);
        for index in window.indices().step_by(step) {
            let (Some(x), Some(&value)) = (ctx.x_pixel_at(index), ctx.data().series.get(index))
            else {
                continue;
            };
            let text = if time_axis {
                format_time_label(value, options.time_zone)
            } else {
                format!("{value}")
            };
            x_labels.push((x, text));
        }
    }

    let mut y_labels = Vec::new();
    if let Some((min, max)) = ctx.y_scale().range {
        let ticks = axis_tick_target_count(bbox.height, AXIS_VALUE_TARGET_SPACING_PX * ratio);
        let step = (max - min) / (ticks - 1) as f64;
        for tick in 0..ticks {
            let value = if step > 0.0 {
                min + step * tick as f64
            } else {
                min
            };
            if let Some(y) = ctx.y_pixel_of(value) {
                y_labels.push((y, format_value_label(value, step)));
            }
            if step <= 0.0 {
                break;
            }
        }
    }

    let mut canvas = ctx.canvas_mut().save_scope();
    canvas.set_stroke_style(AXIS_COLOR);
    canvas.set_fill_style(AXIS_COLOR);
    canvas.set_line_width(ratio);
    canvas.stroke_line(bbox.left, bbox.top, bbox.left, bbox.bottom());
    canvas.stroke_line(bbox.left, bbox.bottom(), bbox.right(), bbox.bottom());

    if !options.title.is_empty() {
        canvas.set_font_size(TITLE_FONT_PX * ratio);
        canvas.set_text_align(TextHAlign::Center);
        canvas.fill_text(
            options.title.as_str(),
            f64::from(viewport.width) / 2.0,
            AXIS_LABEL_OFFSET_PX * ratio,
        );
    }

    canvas.set_font_size(AXIS_FONT_PX * ratio);
    canvas.set_text_align(TextHAlign::Center);
    for (x, text) in x_labels {
        canvas.fill_text(text, x, bbox.bottom() + AXIS_LABEL_OFFSET_PX * ratio);
    }

    canvas.set_text_align(TextHAlign::Right);
    for (y, text) in y_labels {
        canvas.fill_text(text, bbox.left - AXIS_LABEL_OFFSET_PX * ratio, y);
    }
}
