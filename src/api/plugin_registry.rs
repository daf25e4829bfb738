use std::collections::HashSet;

use crate::error::{ChartError, ChartResult};
use crate::extensions::ChartPlugin;
use crate::render::Renderer;

use super::ChartEngine;

/// Rejects empty and duplicate plugin identifiers.
pub(super) fn validate_plugin_ids(plugins: &[Box<dyn ChartPlugin>]) -> ChartResult<()> {
    let mut seen = HashSet::with_capacity(plugins.len());
    for plugin in plugins {
        let plugin_id = plugin.id();
        if plugin_id.is_empty() {
            return Err(ChartError::InvalidData(
                "plugin id must not be empty".to_owned(),
            ));
        }
        if !seen.insert(plugin_id) {
            return Err(ChartError::InvalidData(format!(
                "plugin with id `{plugin_id}` is already registered"
            )));
        }
    }
    Ok(())
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, plugin_id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == plugin_id)
    }

    /// Plugin ids in registration (hook) order.
    #[must_use]
    pub fn plugin_ids(&self) -> Vec<String> {
        self.plugins
            .iter()
            .map(|plugin| plugin.id().to_owned())
            .collect()
    }
}
