use tracing::{debug, warn};

use crate::core::{HeatLadderData, IndexWindow};
use crate::error::ChartResult;
use crate::render::{CursorState, Renderer};

use super::ChartEngine;

impl<R: Renderer> ChartEngine<R> {
    /// Replaces the dataset and redraws.
    ///
    /// The update is all-or-nothing: a shape or value violation leaves the
    /// previous dataset, window and scales untouched. The visible window is
    /// reset to the full series and the hovered index is cleared.
    pub fn set_data(&mut self, data: HeatLadderData) -> ChartResult<()> {
        if let Err(err) = data.validate() {
            warn!(error = %err, series_len = data.len(), "rejected data update");
            return Err(err);
        }

        debug!(
            series_len = data.len(),
            color_min = data.color_range.min(),
            color_max = data.color_range.max(),
            "set heat-ladder data"
        );
        self.ctx.replace_data(data);
        self.clear_hovered_index()?;
        self.render()
    }

    /// Visible window, `None` while the series is empty.
    #[must_use]
    pub fn visible_window(&self) -> Option<IndexWindow> {
        self.ctx.window()
    }

    /// Restricts drawing and range resolution to `[i_min, i_max]`.
    pub fn set_visible_window(&mut self, i_min: usize, i_max: usize) -> ChartResult<()> {
        let window = IndexWindow::new(i_min, i_max, self.ctx.data().len())?;
        debug!(i_min, i_max, "set visible window");
        self.ctx.set_window(window);
        self.clear_hovered_index()?;
        self.render()
    }

    /// Shows the full series again.
    pub fn reset_visible_window(&mut self) -> ChartResult<()> {
        match IndexWindow::full(self.ctx.data().len()) {
            Some(window) => self.set_visible_window(window.i_min(), window.i_max()),
            None => Ok(()),
        }
    }

    fn clear_hovered_index(&mut self) -> ChartResult<()> {
        let pointer = self.ctx.cursor().pointer;
        self.ctx.set_cursor(CursorState {
            index: None,
            pointer,
        });
        self.run_set_cursor_hooks()
    }
}
