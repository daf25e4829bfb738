use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{ChartError, ChartResult};

/// Rung values (or weights) attached to one x-index.
pub type Rungs = SmallVec<[f64; 8]>;

/// Global bound used to normalize rung weights into heat intensity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawColorRange")]
pub struct ColorRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawColorRange {
    min: f64,
    max: f64,
}

impl TryFrom<RawColorRange> for ColorRange {
    type Error = ChartError;

    fn try_from(raw: RawColorRange) -> ChartResult<Self> {
        Self::new(raw.min, raw.max)
    }
}

impl ColorRange {
    pub fn new(min: f64, max: f64) -> ChartResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ChartError::InvalidData(
                "color range bounds must be finite".to_owned(),
            ));
        }
        if min > max {
            return Err(ChartError::InvalidData(format!(
                "color range min ({min}) must be <= max ({max})"
            )));
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(self) -> f64 {
        self.max
    }
}

impl Default for ColorRange {
    fn default() -> Self {
        Self { min: 0.0, max: 0.0 }
    }
}

/// The dataset behind one heat-ladder chart.
///
/// `ladders[i]` and `weights[i]` belong to `series[i]`; `None` marks a missing
/// entry which is skipped by range resolution and drawing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeatLadderData {
    pub series: Vec<f64>,
    pub ladders: Vec<Option<Rungs>>,
    pub weights: Vec<Option<Rungs>>,
    pub color_range: ColorRange,
}

impl HeatLadderData {
    #[must_use]
    pub fn new(
        series: Vec<f64>,
        ladders: Vec<Option<Rungs>>,
        weights: Vec<Option<Rungs>>,
        color_range: ColorRange,
    ) -> Self {
        Self {
            series,
            ladders,
            weights,
            color_range,
        }
    }

    /// Builds a dataset from dense nested vectors (no missing entries).
    #[must_use]
    pub fn from_vecs(
        series: Vec<f64>,
        ladders: Vec<Vec<f64>>,
        weights: Vec<Vec<f64>>,
        color_range: ColorRange,
    ) -> Self {
        Self {
            series,
            ladders: ladders.into_iter().map(|rungs| Some(Rungs::from_vec(rungs))).collect(),
            weights: weights.into_iter().map(|rungs| Some(Rungs::from_vec(rungs))).collect(),
            color_range,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Rung values at `index`, empty when missing or out of range.
    #[must_use]
    pub fn rungs_at(&self, index: usize) -> &[f64] {
        self.ladders
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or(&[])
    }

    /// Weights at `index`, empty when missing or out of range.
    #[must_use]
    pub fn weights_at(&self, index: usize) -> &[f64] {
        self.weights
            .get(index)
            .and_then(Option::as_deref)
            .unwrap_or(&[])
    }

    /// Checks every shape and value invariant without mutating anything.
    pub fn validate(&self) -> ChartResult<()> {
        ColorRange::new(self.color_range.min, self.color_range.max)?;

        let len = self.series.len();
        if self.ladders.len() != len {
            return Err(ChartError::shape(format!(
                "ladder matrix has {} entries but series has {len}",
                self.ladders.len()
            )));
        }
        if self.weights.len() != len {
            return Err(ChartError::shape(format!(
                "weight matrix has {} entries but series has {len}",
                self.weights.len()
            )));
        }

        for (index, (ladder, weights)) in self.ladders.iter().zip(&self.weights).enumerate() {
            match (ladder, weights) {
                (None, None) => {}
                (Some(ladder), Some(weights)) if ladder.len() == weights.len() => {
                    if ladder.iter().chain(weights.iter()).any(|value| !value.is_finite()) {
                        return Err(ChartError::InvalidData(format!(
                            "rung values and weights at index {index} must be finite"
                        )));
                    }
                }
                (Some(ladder), Some(weights)) => {
                    return Err(ChartError::shape(format!(
                        "index {index} has {} rungs but {} weights",
                        ladder.len(),
                        weights.len()
                    )));
                }
                (Some(_), None) | (None, Some(_)) => {
                    return Err(ChartError::shape(format!(
                        "index {index} is missing in only one of ladder/weight matrices"
                    )));
                }
            }
        }

        if let Some(index) = self.series.iter().position(|value| !value.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "series value at index {index} must be finite"
            )));
        }

        Ok(())
    }
}
