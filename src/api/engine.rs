use tracing::debug;

use crate::core::{BoundingBox, HeatLadderData, ResolvedScale};
use crate::error::ChartResult;
use crate::extensions::ChartPlugin;
use crate::render::{RenderContext, Renderer};

use super::plugin_registry::validate_plugin_ids;
use super::{ChartEngineConfig, ChartOptions, X_SCALE, Y_SCALE};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the options, the plugin list, the render context and
/// the renderer, and drives the plugin lifecycle:
/// `opts` hooks, `init` hooks, then a full draw pass. Interaction events run
/// `set_cursor` hooks and repaint the overlay layers only.
pub struct ChartEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) options: ChartOptions,
    pub(super) plugins: Vec<Box<dyn ChartPlugin>>,
    pub(super) ctx: RenderContext,
}

impl<R: Renderer> ChartEngine<R> {
    /// Builds the engine and renders the first full pass.
    pub fn new(renderer: R, config: ChartEngineConfig, data: HeatLadderData) -> ChartResult<Self> {
        let ChartEngineConfig { options, plugins } = config;
        validate_plugin_ids(&plugins)?;

        let options = Self::run_opts_hooks(&plugins, options)?;
        options.validate()?;
        data.validate()?;

        let viewport = options.viewport();
        let bbox = BoundingBox::from_viewport(viewport, options.insets, options.pixel_ratio)?;
        let x_distribution = options.scales[X_SCALE].distribution;
        let y_distribution = options.scales[Y_SCALE].distribution;
        let ctx = RenderContext::new(
            viewport,
            options.pixel_ratio,
            bbox,
            data,
            ResolvedScale::degenerate(x_distribution),
            ResolvedScale::degenerate(y_distribution),
        );

        let mut engine = Self {
            renderer,
            options,
            plugins,
            ctx,
        };
        engine.resolve_scales();
        engine.run_init_hooks()?;
        debug!(
            plugins = engine.plugins.len(),
            series_len = engine.ctx.data().len(),
            width = viewport.width,
            height = viewport.height,
            "chart engine initialized"
        );
        engine.render()?;
        Ok(engine)
    }

    /// Options after every plugin `opts` hook ran.
    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    #[must_use]
    pub fn data(&self) -> &HeatLadderData {
        self.ctx.data()
    }

    #[must_use]
    pub fn render_context(&self) -> &RenderContext {
        &self.ctx
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
