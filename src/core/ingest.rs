use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::dataset::{ColorRange, HeatLadderData, Rungs};
use crate::error::{ChartError, ChartResult};

/// One time-indexed ladder as delivered by ingestion or REST collaborators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LadderRecord {
    pub timestamp: f64,
    #[serde(default)]
    pub rungs: Vec<f64>,
    #[serde(default)]
    pub weights: Vec<f64>,
}

impl LadderRecord {
    #[must_use]
    pub fn new(timestamp: f64, rungs: Vec<f64>, weights: Vec<f64>) -> Self {
        Self {
            timestamp,
            rungs,
            weights,
        }
    }
}

/// Decodes newline-delimited JSON records; blank lines are skipped.
pub fn parse_json_lines(input: &str) -> ChartResult<Vec<LadderRecord>> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_no, line)| {
            serde_json::from_str::<LadderRecord>(line).map_err(|err| {
                ChartError::InvalidData(format!(
                    "failed to parse ladder record on line {}: {err}",
                    line_no + 1
                ))
            })
        })
        .collect()
}

impl HeatLadderData {
    /// Builds a validated dataset from a batch of records, ordered by time.
    ///
    /// Without an explicit `color_range`, the observed weight extent is used.
    pub fn from_records(
        records: &[LadderRecord],
        color_range: Option<ColorRange>,
    ) -> ChartResult<Self> {
        if let Some(record) = records.iter().find(|record| !record.timestamp.is_finite()) {
            return Err(ChartError::InvalidData(format!(
                "record timestamp must be finite, got {}",
                record.timestamp
            )));
        }

        let mut ordered: Vec<&LadderRecord> = records.iter().collect();
        ordered.sort_by_key(|record| OrderedFloat(record.timestamp));

        let color_range = match color_range {
            Some(range) => range,
            None => observed_weight_range(records)?,
        };

        let data = Self {
            series: ordered.iter().map(|record| record.timestamp).collect(),
            ladders: ordered
                .iter()
                .map(|record| Some(Rungs::from_slice(&record.rungs)))
                .collect(),
            weights: ordered
                .iter()
                .map(|record| Some(Rungs::from_slice(&record.weights)))
                .collect(),
            color_range,
        };
        data.validate()?;
        debug!(
            records = records.len(),
            color_min = data.color_range.min(),
            color_max = data.color_range.max(),
            "built heat-ladder dataset from records"
        );
        Ok(data)
    }
}

fn observed_weight_range(records: &[LadderRecord]) -> ChartResult<ColorRange> {
    let weights = records.iter().flat_map(|record| record.weights.iter().copied());
    let (min, max) = weights.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), weight| {
        (min.min(weight), max.max(weight))
    });
    if min > max {
        return Ok(ColorRange::default());
    }
    ColorRange::new(min, max)
}
