//! Coordinate transform shared by the base axes and every plugin.
//!
//! Plugins never compute pixel positions on their own; they go through these
//! functions (usually via `RenderContext`) so highlight bands and ladder cells
//! always line up.

use crate::core::scale::{Axis, Distribution, ResolvedScale};
use crate::core::types::{BoundingBox, IndexWindow};

/// Maps a domain value to an absolute canvas pixel.
///
/// Returns `None` for degenerate scales and non-finite values. A zero-span
/// range maps every value onto the center of the box.
#[must_use]
pub fn value_to_pixel(
    value: f64,
    axis: Axis,
    scale: &ResolvedScale,
    bbox: BoundingBox,
) -> Option<f64> {
    let (min, max) = scale.range?;
    if !value.is_finite() {
        return None;
    }

    let span = max - min;
    let fraction = if span > 0.0 {
        (value - min) / span
    } else {
        0.5
    };

    Some(match axis {
        Axis::X => bbox.left + fraction * bbox.width,
        Axis::Y => bbox.top + (1.0 - fraction) * bbox.height,
    })
}

/// Inverse of [`value_to_pixel`].
#[must_use]
pub fn pixel_to_value(
    pixel: f64,
    axis: Axis,
    scale: &ResolvedScale,
    bbox: BoundingBox,
) -> Option<f64> {
    let (min, max) = scale.range?;
    if !pixel.is_finite() {
        return None;
    }

    let span = max - min;
    if span <= 0.0 {
        return Some(min);
    }

    let fraction = match axis {
        Axis::X => (pixel - bbox.left) / bbox.width,
        Axis::Y => 1.0 - (pixel - bbox.top) / bbox.height,
    };
    Some(min + fraction * span)
}

/// Domain value used to place column `index`: the index itself on ordinal
/// axes, the series value on linear axes.
#[must_use]
pub fn x_domain_value(distribution: Distribution, index: usize, series: &[f64]) -> Option<f64> {
    match distribution {
        Distribution::Ordinal => Some(index as f64),
        Distribution::Linear => series.get(index).copied(),
    }
}

/// Horizontal distance between adjacent column centers.
///
/// A single-index window gets the whole plot width.
#[must_use]
pub fn column_pitch(window: IndexWindow, bbox: BoundingBox) -> f64 {
    bbox.width / window.span().max(1) as f64
}
