//! Chart plugins: the hook trait plus the two plugins a heat-ladder chart is
//! assembled from.

mod column_highlight;
mod heat_ladder;
mod plugins;

pub use column_highlight::{
    COLUMN_HIGHLIGHT_PLUGIN_ID, ColumnHighlightPlugin, DEFAULT_HIGHLIGHT_FILL,
};
pub use heat_ladder::{
    HEAT_LADDER_PLUGIN_ID, HeatLadderPlugin, HeatLadderStyle, LadderCell, heat_blue_channel,
    heat_fill_color, heat_intensity,
};
pub use plugins::ChartPlugin;
