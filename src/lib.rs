//! heat-ladder: a pluggable rendering engine for time-indexed heat-ladder
//! charts.
//!
//! Each column of the chart is a point in time carrying a ladder of rung
//! values; rungs are painted as stacked cells whose color intensity encodes a
//! per-rung weight. The engine resolves scales from the data, hands a render
//! context to an ordered list of plugins and emits backend-agnostic frames.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{ChartEngine, ChartEngineConfig, ChartOptions};
pub use error::{ChartError, ChartResult};
