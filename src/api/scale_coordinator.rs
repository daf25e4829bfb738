use tracing::{trace, warn};

use crate::core::{Axis, ResolvedScale, ladder_range, resolve_x_range};
use crate::render::Renderer;

use super::{ChartEngine, X_SCALE, Y_SCALE};

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn x_scale(&self) -> ResolvedScale {
        self.ctx.x_scale()
    }

    #[must_use]
    pub fn y_scale(&self) -> ResolvedScale {
        self.ctx.y_scale()
    }

    /// Re-resolves both axes from the current data and visible window.
    pub(super) fn resolve_scales(&mut self) {
        let x_scale = self.resolve_axis(X_SCALE, Axis::X);
        let y_scale = self.resolve_axis(Y_SCALE, Axis::Y);
        trace!(x_range = ?x_scale.range, y_range = ?y_scale.range, "resolved scales");
        self.ctx.set_scales(x_scale, y_scale);
    }

    fn resolve_axis(&self, key: &str, axis: Axis) -> ResolvedScale {
        let Some(scale) = self.options.scales.get(key).copied() else {
            return ResolvedScale::degenerate(Default::default());
        };
        let Some(window) = self.ctx.window() else {
            return ResolvedScale::degenerate(scale.distribution);
        };
        let data = self.ctx.data();

        let range = match scale.range_fn {
            Some(range_fn) => {
                let range = range_fn(data, window);
                match range {
                    Some((min, max)) if !min.is_finite() || !max.is_finite() || min > max => {
                        warn!(scale = key, min, max, "range function returned an invalid range");
                        None
                    }
                    other => other,
                }
            }
            None => match axis {
                Axis::X => resolve_x_range(scale.distribution, &data.series, window),
                Axis::Y => ladder_range(data, window),
            },
        };
        ResolvedScale::new(scale.distribution, range)
    }
}
