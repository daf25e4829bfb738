use tracing::trace;

use crate::api::ChartOptions;
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::render::{Color, OverlayElement, OverlayHandle, RenderContext};

pub const COLUMN_HIGHLIGHT_PLUGIN_ID: &str = "column-highlight";

/// Default band fill, `rgba(51, 204, 255, 0.3)`.
pub const DEFAULT_HIGHLIGHT_FILL: Color = Color::rgba(0.2, 0.8, 1.0, 0.3);

/// Highlights the hovered column with a translucent full-height band on the
/// `under` layer.
///
/// The band is sized to one column pitch and centered on the column through
/// the shared coordinate transform, so it lines up with the ladder body drawn
/// for the same index.
#[derive(Debug, Clone)]
pub struct ColumnHighlightPlugin {
    id: String,
    fill: Color,
    class_name: Option<String>,
    handle: Option<OverlayHandle>,
    // Outer `None` until the first cursor event.
    last_index: Option<Option<usize>>,
    geometry_updates: usize,
}

impl Default for ColumnHighlightPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnHighlightPlugin {
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: COLUMN_HIGHLIGHT_PLUGIN_ID.to_owned(),
            fill: DEFAULT_HIGHLIGHT_FILL,
            class_name: None,
            handle: None,
            last_index: None,
            geometry_updates: 0,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Class name looked up in `ChartOptions::overlay_styles` when the band is
    /// painted.
    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn fill(&self) -> Color {
        self.fill
    }

    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    #[must_use]
    pub fn handle(&self) -> Option<OverlayHandle> {
        self.handle
    }

    /// Number of times band geometry was recomputed.
    #[must_use]
    pub fn geometry_updates(&self) -> usize {
        self.geometry_updates
    }
}

impl ChartPlugin for ColumnHighlightPlugin {
    fn id(&self) -> &str {
        &self.id
    }

    fn opts(&self, mut options: ChartOptions) -> ChartResult<ChartOptions> {
        options.cursor.x = false;
        options.cursor.y = false;
        Ok(options)
    }

    fn init(&mut self, ctx: &mut RenderContext) -> ChartResult<()> {
        if self.handle.is_some() {
            return Ok(());
        }

        let element = OverlayElement::new(self.fill).with_class_name(self.class_name.clone());
        let handle = ctx.under_mut().append(element);
        ctx.over_mut().bind_hover_visibility(handle);
        self.handle = Some(handle);
        Ok(())
    }

    fn set_cursor(&mut self, ctx: &mut RenderContext) -> ChartResult<()> {
        let index = ctx.cursor_index();
        if self.last_index == Some(index) {
            return Ok(());
        }
        self.last_index = Some(index);

        let Some(handle) = self.handle else {
            return Ok(());
        };

        let geometry = index.and_then(|index| {
            let pitch = ctx.column_pitch()?;
            let center = ctx.x_pixel_at(index)?;
            Some((pitch, center))
        });

        let Some((pitch, center)) = geometry else {
            ctx.under_mut().set_visible(handle, false);
            trace!(plugin = %self.id, "column highlight hidden");
            return Ok(());
        };

        let pixel_ratio = ctx.pixel_ratio();
        let width = pitch / pixel_ratio;
        let left = (center - ctx.bbox().left) / pixel_ratio - width / 2.0;
        self.geometry_updates += 1;

        let hovered = ctx.over().is_hovered();
        let under = ctx.under_mut();
        under.set_geometry(handle, left, width);
        under.set_visible(handle, hovered);
        trace!(plugin = %self.id, index = ?index, left, width, "column highlight moved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::{ColumnHighlightPlugin, DEFAULT_HIGHLIGHT_FILL};
    use crate::api::ChartOptions;
    use crate::core::{
        BoundingBox, ColorRange, Distribution, HeatLadderData, ResolvedScale, Viewport,
    };
    use crate::extensions::ChartPlugin;
    use crate::render::{Color, CursorState, RenderContext};

    fn context(pixel_ratio: f64) -> RenderContext {
        let data = HeatLadderData::from_vecs(
            vec![0.0, 1.0, 2.0, 3.0, 4.0],
            vec![vec![1.0]; 5],
            vec![vec![1.0]; 5],
            ColorRange::new(0.0, 1.0).expect("range"),
        );
        RenderContext::new(
            Viewport::new(600, 300),
            pixel_ratio,
            BoundingBox::new(40.0, 10.0, 400.0, 200.0),
            data,
            ResolvedScale::new(Distribution::Ordinal, Some((0.0, 4.0))),
            ResolvedScale::new(Distribution::Linear, Some((1.0, 1.0))),
        )
    }

    fn hover(ctx: &mut RenderContext, index: Option<usize>) {
        ctx.set_cursor(CursorState {
            index,
            pointer: Some((0.0, 0.0)),
        });
        let (under, over) = ctx.surfaces_mut();
        over.set_hovered(true, index, under);
    }

    #[test]
    fn default_fill_matches_css_color() {
        assert_eq!(DEFAULT_HIGHLIGHT_FILL, Color::from_rgba8(51, 204, 255, 0.3));
    }

    #[test]
    fn opts_disables_native_crosshair() {
        let options = ChartOptions::default();
        let options = ColumnHighlightPlugin::new().opts(options).expect("opts");
        assert!(!options.cursor.x);
        assert!(!options.cursor.y);
    }

    #[test]
    fn init_is_idempotent() {
        let mut ctx = context(1.0);
        let mut plugin = ColumnHighlightPlugin::new();
        plugin.init(&mut ctx).expect("init");
        plugin.init(&mut ctx).expect("init again");
        assert_eq!(ctx.under().elements().len(), 1);
        assert_eq!(ctx.over().hover_bindings().len(), 1);
        assert!(!ctx.under().elements()[0].visible);
    }

    #[test]
    fn band_is_centered_on_column_in_css_pixels() {
        let mut ctx = context(2.0);
        let mut plugin = ColumnHighlightPlugin::new();
        plugin.init(&mut ctx).expect("init");
        hover(&mut ctx, Some(2));
        plugin.set_cursor(&mut ctx).expect("cursor");

        let element = ctx
            .under()
            .element(plugin.handle().expect("handle"))
            .expect("element");
        // pitch 100 device px -> 50 css px, column 2 at 200 device px from box left
        assert_relative_eq!(element.width, 50.0);
        assert_relative_eq!(element.translate_x, 100.0 - 25.0);
        assert!(element.visible);
    }

    #[test]
    fn repeated_index_skips_geometry_work() {
        let mut ctx = context(1.0);
        let mut plugin = ColumnHighlightPlugin::new();
        plugin.init(&mut ctx).expect("init");

        hover(&mut ctx, Some(1));
        plugin.set_cursor(&mut ctx).expect("cursor");
        plugin.set_cursor(&mut ctx).expect("cursor again");
        assert_eq!(plugin.geometry_updates(), 1);

        hover(&mut ctx, Some(3));
        plugin.set_cursor(&mut ctx).expect("cursor moved");
        assert_eq!(plugin.geometry_updates(), 2);
    }

    #[test]
    fn missing_index_hides_band() {
        let mut ctx = context(1.0);
        let mut plugin = ColumnHighlightPlugin::new();
        plugin.init(&mut ctx).expect("init");
        hover(&mut ctx, Some(1));
        plugin.set_cursor(&mut ctx).expect("cursor");

        hover(&mut ctx, None);
        plugin.set_cursor(&mut ctx).expect("cursor cleared");
        let handle = plugin.handle().expect("handle");
        assert!(!ctx.under().element(handle).expect("element").visible);
    }
}
