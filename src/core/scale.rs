use serde::{Deserialize, Serialize};

use crate::core::dataset::{HeatLadderData, Rungs};
use crate::core::types::IndexWindow;

/// Axis spacing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Distribution {
    /// Columns are evenly spaced by index, regardless of series values.
    Ordinal,
    /// Columns are placed proportionally to their series value.
    #[default]
    Linear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Axis scale after range resolution.
///
/// `range` is `None` when the visible window has no numeric values; such a
/// scale is degenerate and nothing is projected onto it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedScale {
    pub distribution: Distribution,
    pub range: Option<(f64, f64)>,
}

impl ResolvedScale {
    #[must_use]
    pub const fn new(distribution: Distribution, range: Option<(f64, f64)>) -> Self {
        Self {
            distribution,
            range,
        }
    }

    #[must_use]
    pub const fn degenerate(distribution: Distribution) -> Self {
        Self::new(distribution, None)
    }

    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.range.is_none()
    }
}

/// Min/max over every rung value inside `window`.
///
/// Missing entries are skipped rather than read as zero. Returns `None` when
/// the window holds no values at all.
#[must_use]
pub fn resolve_ladder_range(ladders: &[Option<Rungs>], window: IndexWindow) -> Option<(f64, f64)> {
    let end = window.i_max().min(ladders.len().checked_sub(1)?);
    if window.i_min() > end {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for rungs in ladders[window.i_min()..=end].iter().flatten() {
        for &value in rungs {
            min = min.min(value);
            max = max.max(value);
        }
    }

    (min <= max).then_some((min, max))
}

/// Range function wired into the y scale of a heat-ladder chart.
#[must_use]
pub fn ladder_range(data: &HeatLadderData, window: IndexWindow) -> Option<(f64, f64)> {
    resolve_ladder_range(&data.ladders, window)
}

/// Visible x range: the window bounds for ordinal axes, series extremes for
/// linear axes.
#[must_use]
pub fn resolve_x_range(
    distribution: Distribution,
    series: &[f64],
    window: IndexWindow,
) -> Option<(f64, f64)> {
    match distribution {
        Distribution::Ordinal => Some((window.i_min() as f64, window.i_max() as f64)),
        Distribution::Linear => {
            let visible = series.get(window.i_min()..=window.i_max())?;
            let min = visible.iter().copied().fold(f64::INFINITY, f64::min);
            let max = visible.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            (min <= max).then_some((min, max))
        }
    }
}
