mod axis_builder;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod interaction_controller;
mod plugin_dispatch;
mod plugin_registry;
mod render_coordinator;
mod scale_coordinator;

pub use engine::ChartEngine;
pub use engine_config::{
    ChartEngineConfig, ChartOptions, CursorOptions, RangeFn, ScaleOptions, SeriesSpec, X_SCALE,
    Y_SCALE,
};
pub use engine_snapshot::EngineSnapshot;
pub use interaction_controller::LadderSelection;
