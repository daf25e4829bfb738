use std::fmt;

use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Plugin lifecycle hook names, used to tag plugin faults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginHook {
    Opts,
    Init,
    SetCursor,
    Draw,
}

impl PluginHook {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Opts => "opts",
            Self::Init => "init",
            Self::SetCursor => "set_cursor",
            Self::Draw => "draw",
        }
    }
}

impl fmt::Display for PluginHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Ladder/weight matrices do not match the series shape.
    #[error("shape violation: {0}")]
    ShapeViolation(String),

    #[error("time formatting failed: {0}")]
    Time(String),

    /// A plugin hook failed; the whole pass is aborted.
    #[error("plugin `{plugin_id}` failed in `{hook}` hook: {source}")]
    PluginFault {
        plugin_id: String,
        hook: PluginHook,
        #[source]
        source: Box<ChartError>,
    },
}

impl ChartError {
    pub(crate) fn shape(message: impl Into<String>) -> Self {
        Self::ShapeViolation(message.into())
    }

    pub(crate) fn plugin_fault(plugin_id: &str, hook: PluginHook, source: ChartError) -> Self {
        Self::PluginFault {
            plugin_id: plugin_id.to_owned(),
            hook,
            source: Box::new(source),
        }
    }
}
