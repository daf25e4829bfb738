use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LayerKind, LayerPrimitives, RenderFrame, Renderer, TextHAlign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
    pub overlay_repaints: usize,
}

/// Cairo + Pango + PangoCairo renderer painting into an offscreen image
/// surface.
///
/// The last `Main` layer is cached so overlay repaints can recompose the
/// surface without the engine re-running plugin `draw` hooks.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    main_cache: Option<LayerPrimitives>,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        Ok(Self {
            surface,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            main_cache: None,
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    /// Encodes the current surface as PNG.
    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        let mut file = File::create(path).map_err(|err| {
            ChartError::InvalidData(format!("failed to create `{}`: {err}", path.display()))
        })?;
        self.surface.write_to_png(&mut file).map_err(|err| {
            ChartError::InvalidData(format!("failed to write png `{}`: {err}", path.display()))
        })
    }

    fn compose(&mut self, layers: &[&LayerPrimitives]) -> ChartResult<CairoRenderStats> {
        let context = Context::new(&self.surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;

        apply_color(&context, self.clear_color);
        context
            .paint()
            .map_err(|err| map_backend_error("failed to clear surface", err))?;

        let mut stats = CairoRenderStats::default();
        for layer in layers {
            paint_layer(&context, layer, &mut stats)?;
        }
        Ok(stats)
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.main_cache = frame.layer(LayerKind::Main).cloned();

        let layers: Vec<&LayerPrimitives> = frame.layers.iter().collect();
        let stats = self.compose(&layers)?;
        self.last_stats = stats;
        Ok(())
    }

    fn render_overlay(&mut self, overlay: &RenderFrame) -> ChartResult<()> {
        overlay.validate()?;
        let main = self
            .main_cache
            .clone()
            .unwrap_or_else(|| LayerPrimitives::new(LayerKind::Main));

        let mut layers = Vec::with_capacity(3);
        if let Some(under) = overlay.layer(LayerKind::Under) {
            layers.push(under);
        }
        layers.push(&main);
        if let Some(over) = overlay.layer(LayerKind::Over) {
            layers.push(over);
        }

        let mut stats = self.compose(&layers)?;
        stats.overlay_repaints = self.last_stats.overlay_repaints + 1;
        self.last_stats = stats;
        Ok(())
    }
}

fn paint_layer(
    context: &Context,
    layer: &LayerPrimitives,
    stats: &mut CairoRenderStats,
) -> ChartResult<()> {
    for rect in &layer.rects {
        apply_color(context, rect.fill);
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        context
            .fill()
            .map_err(|err| map_backend_error("failed to fill rectangle", err))?;
        stats.rects_drawn += 1;
    }

    for line in &layer.lines {
        apply_color(context, line.color);
        context.set_line_width(line.stroke_width);
        context.move_to(line.x1, line.y1);
        context.line_to(line.x2, line.y2);
        context
            .stroke()
            .map_err(|err| map_backend_error("failed to stroke line", err))?;
        stats.lines_drawn += 1;
    }

    for text in &layer.texts {
        let layout = pangocairo::functions::create_layout(context);
        let font_description = FontDescription::from_string(&format!("Sans {}", text.font_size_px));
        layout.set_font_description(Some(&font_description));
        layout.set_text(&text.text);

        let (text_width, _) = layout.pixel_size();
        let x = match text.h_align {
            TextHAlign::Left => text.x,
            TextHAlign::Center => text.x - f64::from(text_width) / 2.0,
            TextHAlign::Right => text.x - f64::from(text_width),
        };

        apply_color(context, text.color);
        context.move_to(x, text.y);
        pangocairo::functions::show_layout(context, &layout);
        stats.texts_drawn += 1;
    }
    Ok(())
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::InvalidData(format!("{prefix}: {err}"))
}
