use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Canvas size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Space reserved around the plot for title and axis labels, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left: 56.0,
            right: 16.0,
            top: 32.0,
            bottom: 36.0,
        }
    }
}

impl PlotInsets {
    pub(crate) fn validate(self) -> ChartResult<Self> {
        for (side, value) in [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "plot inset `{side}` must be finite and >= 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Plot area inside the canvas, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Derives the plot box from the canvas size, CSS insets and pixel ratio.
    pub fn from_viewport(
        viewport: Viewport,
        insets: PlotInsets,
        pixel_ratio: f64,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let insets = insets.validate()?;
        let left = insets.left * pixel_ratio;
        let top = insets.top * pixel_ratio;
        let width = f64::from(viewport.width) - left - insets.right * pixel_ratio;
        let height = f64::from(viewport.height) - top - insets.bottom * pixel_ratio;
        if width <= 0.0 || height <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "plot insets leave no drawable area in {}x{} canvas",
                viewport.width, viewport.height
            )));
        }
        Ok(Self::new(left, top, width, height))
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }

    #[must_use]
    pub fn contains_x(self, x: f64) -> bool {
        x >= self.left && x <= self.right()
    }
}

/// Inclusive index range of the series mapped onto the plot width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawIndexWindow")]
pub struct IndexWindow {
    i_min: usize,
    i_max: usize,
}

#[derive(Deserialize)]
struct RawIndexWindow {
    i_min: usize,
    i_max: usize,
}

// Series length is unknown here, only ordering is checked.
impl TryFrom<RawIndexWindow> for IndexWindow {
    type Error = ChartError;

    fn try_from(raw: RawIndexWindow) -> ChartResult<Self> {
        if raw.i_min > raw.i_max {
            return Err(ChartError::InvalidData(format!(
                "index window [{}, {}] is inverted",
                raw.i_min, raw.i_max
            )));
        }
        Ok(Self {
            i_min: raw.i_min,
            i_max: raw.i_max,
        })
    }
}

impl IndexWindow {
    /// Creates a window for a series of `len` samples.
    pub fn new(i_min: usize, i_max: usize, len: usize) -> ChartResult<Self> {
        if i_min > i_max || i_max >= len {
            return Err(ChartError::InvalidData(format!(
                "index window [{i_min}, {i_max}] is outside series of length {len}"
            )));
        }
        Ok(Self { i_min, i_max })
    }

    /// Full-series window, `None` for an empty series.
    #[must_use]
    pub fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|i_max| Self { i_min: 0, i_max })
    }

    #[must_use]
    pub fn i_min(self) -> usize {
        self.i_min
    }

    #[must_use]
    pub fn i_max(self) -> usize {
        self.i_max
    }

    /// Number of visible indices.
    #[must_use]
    pub fn count(self) -> usize {
        self.i_max - self.i_min + 1
    }

    /// Distance between the first and last visible index.
    #[must_use]
    pub fn span(self) -> usize {
        self.i_max - self.i_min
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        (self.i_min..=self.i_max).contains(&index)
    }

    #[must_use]
    pub fn indices(self) -> RangeInclusive<usize> {
        self.i_min..=self.i_max
    }

    #[must_use]
    pub fn clamp(self, index: usize) -> usize {
        index.clamp(self.i_min, self.i_max)
    }
}
