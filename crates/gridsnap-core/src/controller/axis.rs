//! Move/resize notifications and the debounced snap decision for each axis.

use gridsnap_common::{Millis, Rect, Result, WindowId};

use crate::geometry::{snap_dimension, snap_position};
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
    /// The host reports the window was dragged to `rect`.
    pub fn on_move(&mut self, id: &WindowId, rect: Rect, now: Millis) -> Result<()> {
        self.schedule_axis(id, Axis::Position, now, |_| {
            tracing::trace!(window = %id, x = rect.x, y = rect.y, "move notification");
        });
        Ok(())
    }

    /// The host reports the window was resized to `width` x `height`.
    pub fn on_resize(&mut self, id: &WindowId, width: f64, height: f64, now: Millis) -> Result<()> {
        self.schedule_axis(id, Axis::Dimension, now, |this| {
            this.notified_size.insert(id.clone(), (width, height));
        });
        Ok(())
    }

    /// Restart the debounce for one axis unless the window is unknown or the
    /// axis is inside its guard. `record` runs only when the notification is
    /// accepted.
    fn schedule_axis(
        &mut self,
        id: &WindowId,
        axis: Axis,
        now: Millis,
        record: impl FnOnce(&mut Self),
    ) {
        if !self.state.contains(id) {
            tracing::debug!(window = %id, ?axis, "notification for unknown window ignored");
            return;
        }
        let key = (id.clone(), axis);
        if self.is_guarded(&key, now) {
            tracing::debug!(window = %id, ?axis, "echo of programmatic change ignored");
            return;
        }
        record(self);
        let due = now.after(self.settings.debounce);
        self.timers.schedule(key, due);
    }

    pub(super) fn settle_position(&mut self, id: &WindowId, now: Millis) -> Result<()> {
        if !self.state.contains(id) || self.is_guarded(&(id.clone(), Axis::Position), now) {
            return Ok(());
        }
        let Some(live) = self.host.frame(id) else {
            tracing::debug!(window = %id, "no live frame, position left alone");
            return Ok(());
        };
        let Some(cell) = self.cell_size() else {
            tracing::warn!(window = %id, "viewport is empty, position not snapped");
            return Ok(());
        };

        let (x, y) = snap_position(
            live.x,
            live.y,
            live.width,
            live.height,
            cell.cell_width,
            cell.cell_height,
        );
        let tolerance = self.settings.snap_tolerance;
        if (x - live.x).abs() > tolerance || (y - live.y).abs() > tolerance {
            tracing::debug!(window = %id, from_x = live.x, from_y = live.y, x, y, "snapping position");
            self.host.move_to(id, x, y)?;
            self.state.apply(id, WindowPatch::position(x, y), Some(cell));
            self.arm_guard(id, Axis::Position, now);
        } else {
            tracing::debug!(window = %id, x = live.x, y = live.y, "position already on grid");
            self.state
                .apply(id, WindowPatch::position(live.x, live.y), Some(cell));
            self.settle(id, Axis::Position);
        }
        self.persist()
    }

    pub(super) fn settle_dimension(&mut self, id: &WindowId, now: Millis) -> Result<()> {
        let notified = self.notified_size.remove(id);
        if !self.state.contains(id) || self.is_guarded(&(id.clone(), Axis::Dimension), now) {
            return Ok(());
        }
        let Some(live) = self.host.frame(id) else {
            tracing::debug!(window = %id, "no live frame, size left alone");
            return Ok(());
        };
        let viewport = self.viewport.viewport();
        let cell = self.cell_size();

        let (notified_width, notified_height) = notified.unwrap_or((live.width, live.height));
        let tolerance = self.settings.fullscreen_tolerance;
        if notified_width >= viewport.width - tolerance
            && notified_height >= viewport.height - tolerance
        {
            tracing::debug!(
                window = %id,
                width = notified_width,
                height = notified_height,
                "fullscreen-sized, not snapping"
            );
            self.state
                .apply(id, WindowPatch::size(notified_width, notified_height), cell);
            self.settle(id, Axis::Dimension);
            return self.persist();
        }

        let Some(cell) = cell else {
            tracing::warn!(window = %id, "viewport is empty, size not snapped");
            return Ok(());
        };
        let (width, height) =
            snap_dimension(live.width, live.height, cell.cell_width, cell.cell_height);
        let tolerance = self.settings.snap_tolerance;
        if (width - live.width).abs() > tolerance || (height - live.height).abs() > tolerance {
            tracing::debug!(
                window = %id,
                from_width = live.width,
                from_height = live.height,
                width,
                height,
                "snapping size"
            );
            self.host.resize(id, width, height)?;
            self.state
                .apply(id, WindowPatch::size(width, height), Some(cell));
            self.arm_guard(id, Axis::Dimension, now);
        } else {
            tracing::debug!(window = %id, width = live.width, height = live.height, "size already on grid");
            self.state
                .apply(id, WindowPatch::size(live.width, live.height), Some(cell));
            self.settle(id, Axis::Dimension);
        }
        self.persist()
    }
}
