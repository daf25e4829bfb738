use tracing::warn;

use crate::error::{ChartError, ChartResult, PluginHook};
use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::{ChartEngine, ChartOptions};

impl<R: Renderer> ChartEngine<R> {
    pub(super) fn run_opts_hooks(
        plugins: &[Box<dyn ChartPlugin>],
        options: ChartOptions,
    ) -> ChartResult<ChartOptions> {
        plugins.iter().try_fold(options, |options, plugin| {
            plugin
                .opts(options)
                .map_err(|err| ChartError::plugin_fault(plugin.id(), PluginHook::Opts, err))
        })
    }

    pub(super) fn run_init_hooks(&mut self) -> ChartResult<()> {
        for plugin in &mut self.plugins {
            plugin
                .init(&mut self.ctx)
                .map_err(|err| ChartError::plugin_fault(plugin.id(), PluginHook::Init, err))?;
        }
        Ok(())
    }

    pub(super) fn run_set_cursor_hooks(&mut self) -> ChartResult<()> {
        for plugin in &mut self.plugins {
            plugin
                .set_cursor(&mut self.ctx)
                .map_err(|err| ChartError::plugin_fault(plugin.id(), PluginHook::SetCursor, err))?;
        }
        Ok(())
    }

    /// Runs `draw` hooks on the shared canvas, resetting its state after each
    /// plugin.
    pub(super) fn run_draw_hooks(&mut self) -> ChartResult<()> {
        for plugin in &mut self.plugins {
            let result = plugin.draw(&mut self.ctx);
            let leaked = self.ctx.canvas_mut().reset_state();
            if leaked > 0 {
                warn!(
                    plugin = plugin.id(),
                    leaked, "plugin left unbalanced canvas saves"
                );
            }
            result.map_err(|err| ChartError::plugin_fault(plugin.id(), PluginHook::Draw, err))?;
        }
        Ok(())
    }
}
