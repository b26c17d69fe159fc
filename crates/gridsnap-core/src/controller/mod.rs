//! Snap controller: turns raw host notifications into debounced, grid-aligned
//! geometry and keeps page state and the persistence sink in step.
//!
//! The controller is a plain `&mut self` state machine. Whoever drives it
//! supplies the current [`Millis`] with every call and calls [`SnapController::tick`]
//! once [`SnapController::next_deadline`] has passed.

mod axis;
mod lifecycle;
mod reflow;
mod types;

#[cfg(test)]
mod tests;

pub use types::*;

use std::collections::HashMap;

use gridsnap_common::{Millis, Result, WindowId};

use crate::geometry::{compute_cell_size, CellSize};
use crate::host::{HostEvent, WindowHost};
use crate::overlay::GridOverlay;
use crate::persist::StateSink;
use crate::scheduler::TimerQueue;
use crate::state::PageState;
use crate::viewport::ViewportSource;

type AxisKey = (WindowId, Axis);

pub struct SnapController<H, V, S> {
    host: H,
    viewport: V,
    sink: S,
    state: PageState,
    settings: SnapSettings,
    placement: PlacementDefaults,
    timers: TimerQueue<AxisKey>,
    /// Phase of each axis once its debounce timer has fired or a guard is armed.
    phases: HashMap<AxisKey, AxisPhase>,
    /// Size reported by the latest resize notification, per window.
    notified_size: HashMap<WindowId, (f64, f64)>,
}

impl<H, V, S> SnapController<H, V, S>
where
    H: WindowHost,
    V: ViewportSource,
    S: StateSink,
{
    pub fn new(host: H, viewport: V, sink: S, state: PageState) -> Self {
        Self {
            host,
            viewport,
            sink,
            state,
            settings: SnapSettings::default(),
            placement: PlacementDefaults::default(),
            timers: TimerQueue::new(),
            phases: HashMap::new(),
            notified_size: HashMap::new(),
        }
    }

    pub fn with_settings(mut self, settings: SnapSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_placement(mut self, placement: PlacementDefaults) -> Self {
        self.placement = placement;
        self
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn settings(&self) -> &SnapSettings {
        &self.settings
    }

    /// Cell size for the viewport as it is right now, `None` while the
    /// viewport is empty.
    pub fn cell_size(&self) -> Option<CellSize> {
        let cell = compute_cell_size(self.viewport.viewport(), self.state.grid());
        cell.is_usable().then_some(cell)
    }

    /// Background grid matching the current cell size.
    pub fn overlay(&self) -> Option<GridOverlay> {
        self.cell_size().map(GridOverlay::for_cell)
    }

    /// Earliest time at which [`Self::tick`] has work to do.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.next_deadline()
    }

    pub fn axis_phase(&self, id: &WindowId, axis: Axis, now: Millis) -> AxisPhase {
        let key = (id.clone(), axis);
        if let Some(due) = self.timers.deadline(&key) {
            return AxisPhase::PendingDebounce { due };
        }
        match self.phases.get(&key) {
            Some(AxisPhase::Snapping { until }) if *until <= now => AxisPhase::Settled,
            Some(phase) => *phase,
            None => AxisPhase::Idle,
        }
    }

    /// Route a host notification to its handler.
    pub fn dispatch(&mut self, event: HostEvent, now: Millis) -> Result<()> {
        match event {
            HostEvent::Moved(id, rect) => self.on_move(&id, rect, now),
            HostEvent::Resized(id, width, height) => self.on_resize(&id, width, height, now),
            HostEvent::Closed(id) => self.on_close(&id),
            HostEvent::Minimized(id) => self.on_minimize(&id),
            HostEvent::Maximized(id) => self.on_maximize(&id),
            HostEvent::Restored(id) => self.on_restore(&id, now),
        }
    }

    /// Fire every debounce timer due at `now`, earliest first.
    pub fn tick(&mut self, now: Millis) -> Result<()> {
        while let Some(((id, axis), _)) = self.timers.pop_due(now) {
            match axis {
                Axis::Position => self.settle_position(&id, now)?,
                Axis::Dimension => self.settle_dimension(&id, now)?,
            }
        }
        Ok(())
    }

    fn persist(&mut self) -> Result<()> {
        self.sink.persist(&self.state)?;
        Ok(())
    }

    fn is_guarded(&self, key: &AxisKey, now: Millis) -> bool {
        matches!(self.phases.get(key), Some(AxisPhase::Snapping { until }) if *until > now)
    }

    /// Enter the guard for an axis the controller just changed itself.
    fn arm_guard(&mut self, id: &WindowId, axis: Axis, now: Millis) {
        let key = (id.clone(), axis);
        self.timers.cancel(&key);
        let until = now.after(self.settings.debounce);
        self.phases.insert(key, AxisPhase::Snapping { until });
    }

    fn settle(&mut self, id: &WindowId, axis: Axis) {
        self.phases.insert((id.clone(), axis), AxisPhase::Settled);
    }

    /// Drop all timers and bookkeeping for a window.
    fn forget(&mut self, id: &WindowId) {
        self.timers.cancel_where(|(key_id, _)| key_id == id);
        self.phases.retain(|(key_id, _), _| key_id != id);
        self.notified_size.remove(id);
    }
}
