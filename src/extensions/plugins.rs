use crate::api::ChartOptions;
use crate::error::ChartResult;
use crate::render::RenderContext;

/// Extension hook interface.
///
/// Every hook has a no-op default, so a plugin only implements what it needs.
/// Hooks run in registration order. An error from any hook aborts the current
/// pass and reaches the caller as a `PluginFault`.
pub trait ChartPlugin {
    /// Stable, non-empty identifier, unique within one engine.
    fn id(&self) -> &str;

    /// Runs once before the engine validates its options.
    fn opts(&self, options: ChartOptions) -> ChartResult<ChartOptions> {
        Ok(options)
    }

    /// Runs once after the overlay layers exist.
    ///
    /// Calling it again must not duplicate overlay elements.
    fn init(&mut self, _ctx: &mut RenderContext) -> ChartResult<()> {
        Ok(())
    }

    /// Runs on every interaction event, after the cursor state was updated.
    fn set_cursor(&mut self, _ctx: &mut RenderContext) -> ChartResult<()> {
        Ok(())
    }

    /// Runs once per full draw pass, after the base axes.
    fn draw(&mut self, _ctx: &mut RenderContext) -> ChartResult<()> {
        Ok(())
    }
}
