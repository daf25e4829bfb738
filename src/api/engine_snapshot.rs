use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{BoundingBox, IndexWindow, ResolvedScale, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CursorState, OverlayElement, Renderer};

use super::ChartEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub pixel_ratio: f64,
    pub bbox: BoundingBox,
    pub series_len: usize,
    pub color_range: (f64, f64),
    pub window: Option<IndexWindow>,
    pub x_scale: ResolvedScale,
    pub y_scale: ResolvedScale,
    pub cursor: CursorState,
    pub plugin_ids: Vec<String>,
    pub overlay: Vec<OverlayElement>,
    /// Primitive counts of the last main-layer ink.
    pub main_ink: IndexMap<String, usize>,
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let data = self.ctx.data();
        let ink = self.ctx.canvas().ink();
        let mut main_ink = IndexMap::new();
        main_ink.insert("lines".to_owned(), ink.lines.len());
        main_ink.insert("rects".to_owned(), ink.rects.len());
        main_ink.insert("texts".to_owned(), ink.texts.len());

        EngineSnapshot {
            viewport: self.ctx.viewport(),
            pixel_ratio: self.ctx.pixel_ratio(),
            bbox: self.ctx.bbox(),
            series_len: data.len(),
            color_range: (data.color_range.min(), data.color_range.max()),
            window: self.ctx.window(),
            x_scale: self.ctx.x_scale(),
            y_scale: self.ctx.y_scale(),
            cursor: self.ctx.cursor(),
            plugin_ids: self.plugin_ids(),
            overlay: self.ctx.under().elements().to_vec(),
            main_ink,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
