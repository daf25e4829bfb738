pub mod dataset;
pub mod ingest;
pub mod scale;
pub mod time_format;
pub mod transform;
pub mod types;

pub use dataset::{ColorRange, HeatLadderData, Rungs};
pub use ingest::{LadderRecord, parse_json_lines};
pub use scale::{
    Axis, Distribution, ResolvedScale, ladder_range, resolve_ladder_range, resolve_x_range,
};
pub use time_format::{LabelTimeZone, TIMESTAMP_PATTERN, format_time_label, format_timestamp};
pub use transform::{column_pitch, pixel_to_value, value_to_pixel, x_domain_value};
pub use types::{BoundingBox, IndexWindow, PlotInsets, Viewport};
