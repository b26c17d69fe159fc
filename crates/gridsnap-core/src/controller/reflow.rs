use gridsnap_common::{Millis, Result};

use crate::geometry::reflow_rect;
use crate::host::WindowHost;
use crate::persist::StateSink;
use crate::state::WindowPatch;
use crate::viewport::ViewportSource;

use super::{Axis, SnapController};

impl<H, V, S> SnapController<H, V, S>
where
    H: WindowHost,
    V: ViewportSource,
    S: StateSink,
{
    /// The viewport changed size: put every window back where its grid units
    /// say it belongs, scaled to the new cells and kept on screen.
    pub fn on_viewport_changed(&mut self, now: Millis) -> Result<()> {
        let viewport = self.viewport.viewport();
        let Some(cell) = self.cell_size() else {
            tracing::warn!(
                width = viewport.width,
                height = viewport.height,
                "viewport is empty, windows not reflowed"
            );
            return Ok(());
        };
        if let Some(overlay) = self.overlay() {
            tracing::debug!(background_size = %overlay.background_size, "grid overlay updated");
        }

        let margin = self.settings.reflow_margin;
        let mut moved = 0usize;
        for id in self.state.window_ids() {
            let Some(grid) = self.state.window(&id).and_then(|w| w.grid_rect()) else {
                tracing::debug!(window = %id, "no grid units yet, not reflowed");
                continue;
            };
            if self.host.frame(&id).is_none() {
                tracing::debug!(window = %id, "window not on host, not reflowed");
                continue;
            }

            let rect = reflow_rect(grid, cell, viewport, margin);
            self.host.move_to(&id, rect.x, rect.y)?;
            self.host.resize(&id, rect.width, rect.height)?;
            self.state.apply(&id, WindowPatch::frame(rect), Some(cell));
            self.arm_guard(&id, Axis::Position, now);
            self.arm_guard(&id, Axis::Dimension, now);
            moved += 1;
        }

        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            windows = moved,
            "reflowed windows"
        );
        self.persist()
    }
}
