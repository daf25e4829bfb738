use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    Distribution, HeatLadderData, IndexWindow, LabelTimeZone, PlotInsets, Viewport, ladder_range,
};
use crate::error::{ChartError, ChartResult};
use crate::extensions::{ChartPlugin, ColumnHighlightPlugin, HeatLadderPlugin};
use crate::render::Color;

/// Scale key of the time axis.
pub const X_SCALE: &str = "x";
/// Scale key of the ladder value axis.
pub const Y_SCALE: &str = "y";

/// Custom range resolution: `(data, visible window) -> (min, max)`.
///
/// `None` means the window holds no values and the axis is degenerate.
pub type RangeFn = fn(&HeatLadderData, IndexWindow) -> Option<(f64, f64)>;

/// Per-axis scale configuration.
///
/// With `auto = true` the engine resolves the built-in range (series extent
/// for x, ladder extent for y). With `auto = false` the scale must carry a
/// `range_fn`. Fixed numeric ranges are not supported.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub auto: bool,
    #[serde(default)]
    pub distribution: Distribution,
    #[serde(default)]
    pub time: bool,
    #[serde(skip)]
    pub range_fn: Option<RangeFn>,
}

impl ScaleOptions {
    #[must_use]
    pub fn auto(distribution: Distribution) -> Self {
        Self {
            auto: true,
            distribution,
            time: false,
            range_fn: None,
        }
    }

    /// Manual scale resolved through `range_fn` on every update.
    #[must_use]
    pub fn ranged(distribution: Distribution, range_fn: RangeFn) -> Self {
        Self {
            auto: false,
            distribution,
            time: false,
            range_fn: Some(range_fn),
        }
    }

    #[must_use]
    pub fn with_time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }
}

// Function pointers are compared by presence only.
impl PartialEq for ScaleOptions {
    fn eq(&self, other: &Self) -> bool {
        self.auto == other.auto
            && self.distribution == other.distribution
            && self.time == other.time
            && self.range_fn.is_some() == other.range_fn.is_some()
    }
}

/// One data column bound to a scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSpec {
    pub label: String,
    pub scale: String,
}

impl SeriesSpec {
    #[must_use]
    pub fn new(label: impl Into<String>, scale: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            scale: scale.into(),
        }
    }
}

/// Native crosshair drawn on the `over` surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CursorOptions {
    pub x: bool,
    pub y: bool,
    pub stroke: Color,
}

impl Default for CursorOptions {
    fn default() -> Self {
        Self {
            x: true,
            y: true,
            stroke: Color::rgba(0.3, 0.3, 0.3, 0.8),
        }
    }
}

/// Chart options, transformed by plugin `opts` hooks before validation.
///
/// `width`/`height` are CSS pixels; the canvas is `pixel_ratio` times larger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default = "default_pixel_ratio")]
    pub pixel_ratio: f64,
    #[serde(default)]
    pub insets: PlotInsets,
    pub scales: IndexMap<String, ScaleOptions>,
    #[serde(default)]
    pub series: Vec<SeriesSpec>,
    #[serde(default)]
    pub cursor: CursorOptions,
    #[serde(default)]
    pub time_zone: LabelTimeZone,
    /// Fill overrides for overlay elements, keyed by class name.
    #[serde(default)]
    pub overlay_styles: IndexMap<String, Color>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::heat_ladder(1440, 600, "Latency heatmap ladder")
    }
}

impl ChartOptions {
    /// Heat-ladder layout: a linear time axis and a y scale resolved from the
    /// visible ladder rungs.
    #[must_use]
    pub fn heat_ladder(width: u32, height: u32, title: impl Into<String>) -> Self {
        let mut scales = IndexMap::new();
        scales.insert(
            X_SCALE.to_owned(),
            ScaleOptions::auto(Distribution::Linear).with_time(true),
        );
        scales.insert(
            Y_SCALE.to_owned(),
            ScaleOptions::ranged(Distribution::Linear, ladder_range),
        );

        Self {
            width,
            height,
            title: title.into(),
            pixel_ratio: default_pixel_ratio(),
            insets: PlotInsets::default(),
            scales,
            series: vec![
                SeriesSpec::new("time", X_SCALE),
                SeriesSpec::new("latency", Y_SCALE),
                SeriesSpec::new("count", Y_SCALE),
            ],
            cursor: CursorOptions::default(),
            time_zone: LabelTimeZone::Utc,
            overlay_styles: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_pixel_ratio(mut self, pixel_ratio: f64) -> Self {
        self.pixel_ratio = pixel_ratio;
        self
    }

    #[must_use]
    pub fn with_time_zone(mut self, time_zone: LabelTimeZone) -> Self {
        self.time_zone = time_zone;
        self
    }

    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    #[must_use]
    pub fn with_x_distribution(mut self, distribution: Distribution) -> Self {
        if let Some(scale) = self.scales.get_mut(X_SCALE) {
            scale.distribution = distribution;
        }
        self
    }

    #[must_use]
    pub fn with_scale(mut self, key: impl Into<String>, scale: ScaleOptions) -> Self {
        self.scales.insert(key.into(), scale);
        self
    }

    #[must_use]
    pub fn with_overlay_style(mut self, class_name: impl Into<String>, fill: Color) -> Self {
        self.overlay_styles.insert(class_name.into(), fill);
        self
    }

    /// Canvas size in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            scaled_dimension(self.width, self.pixel_ratio),
            scaled_dimension(self.height, self.pixel_ratio),
        )
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        if !self.pixel_ratio.is_finite() || self.pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(
                "pixel ratio must be finite and > 0".to_owned(),
            ));
        }
        self.insets.validate()?;
        self.time_zone.validate()?;
        self.cursor.stroke.validate()?;

        for key in [X_SCALE, Y_SCALE] {
            let scale = self.scales.get(key).ok_or_else(|| {
                ChartError::InvalidData(format!("scale `{key}` must be configured"))
            })?;
            if !scale.auto && scale.range_fn.is_none() {
                return Err(ChartError::InvalidData(format!(
                    "scale `{key}` has auto disabled but no range function"
                )));
            }
        }

        for series in &self.series {
            if !self.scales.contains_key(&series.scale) {
                return Err(ChartError::InvalidData(format!(
                    "series `{}` references undeclared scale `{}`",
                    series.label, series.scale
                )));
            }
        }

        for (class_name, fill) in &self.overlay_styles {
            fill.validate().map_err(|err| {
                ChartError::InvalidData(format!("overlay style `{class_name}`: {err}"))
            })?;
        }
        Ok(())
    }

    /// Serializes options to pretty JSON. Range functions are not serialized.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize options: {e}")))
    }

    /// Deserializes options from JSON.
    ///
    /// A manual y scale gets the ladder extent as its range function, which is
    /// the only range function a JSON document can refer to.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let mut options: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse options: {e}")))?;
        if let Some(scale) = options.scales.get_mut(Y_SCALE) {
            if !scale.auto && scale.range_fn.is_none() {
                scale.range_fn = Some(ladder_range);
            }
        }
        Ok(options)
    }
}

fn default_pixel_ratio() -> f64 {
    1.0
}

fn scaled_dimension(css: u32, pixel_ratio: f64) -> u32 {
    let scaled = (f64::from(css) * pixel_ratio).round();
    if scaled.is_finite() && scaled >= 1.0 && scaled <= f64::from(u32::MAX) {
        scaled as u32
    } else {
        0
    }
}

/// Options plus the ordered plugin list.
///
/// Registration order is hook order and stacking order.
pub struct ChartEngineConfig {
    pub options: ChartOptions,
    pub plugins: Vec<Box<dyn ChartPlugin>>,
}

impl ChartEngineConfig {
    #[must_use]
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            plugins: Vec::new(),
        }
    }

    /// The reference heat-ladder chart: column highlight plus ladder plugin.
    #[must_use]
    pub fn heat_ladder(options: ChartOptions) -> Self {
        Self::new(options)
            .with_plugin(ColumnHighlightPlugin::new())
            .with_plugin(HeatLadderPlugin::new())
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: impl ChartPlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    #[must_use]
    pub fn with_boxed_plugin(mut self, plugin: Box<dyn ChartPlugin>) -> Self {
        self.plugins.push(plugin);
        self
    }
}
