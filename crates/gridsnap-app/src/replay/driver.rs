use std::cell::Cell;
use std::rc::Rc;

use gridsnap_common::{Millis, Result, Viewport, WindowId};
use gridsnap_core::{HeadlessHost, HostEvent, PageState, SnapController, UrlStateStore, WindowHost};
use tokio::time::Instant;

use super::script::{Action, Script};

pub type ReplayController = SnapController<HeadlessHost, Rc<Cell<Viewport>>, UrlStateStore>;

/// Drives a controller backed by the headless host through a script.
///
/// Timers are fired at their exact deadlines between steps, so instant and
/// real-time runs produce the same result.
pub struct ReplayDriver {
    controller: ReplayController,
    viewport: Rc<Cell<Viewport>>,
    /// Wall-clock origin when replaying in real time.
    started: Option<Instant>,
}

impl ReplayDriver {
    pub fn new(controller: ReplayController, viewport: Rc<Cell<Viewport>>) -> Self {
        Self {
            controller,
            viewport,
            started: None,
        }
    }

    pub fn realtime(mut self) -> Self {
        self.started = Some(Instant::now());
        self
    }

    #[cfg(test)]
    pub fn controller(&self) -> &ReplayController {
        &self.controller
    }

    pub fn state(&self) -> &PageState {
        self.controller.state()
    }

    pub fn url(&self) -> String {
        self.controller.sink().url()
    }

    pub async fn run(&mut self, script: &Script) -> Result<()> {
        self.controller.attach_all()?;
        self.pump(Millis(0))?;

        for step in &script.steps {
            let at = Millis(step.at_ms);
            self.advance_to(at).await?;
            self.wait_until(at).await;
            self.apply(&step.action, at)?;
            self.pump(at)?;
        }
        self.drain_timers().await
    }

    /// Fire every timer due up to and including `at`.
    async fn advance_to(&mut self, at: Millis) -> Result<()> {
        while let Some(deadline) = self.controller.next_deadline() {
            if deadline > at {
                break;
            }
            self.fire(deadline).await?;
        }
        Ok(())
    }

    async fn drain_timers(&mut self) -> Result<()> {
        while let Some(deadline) = self.controller.next_deadline() {
            self.fire(deadline).await?;
        }
        Ok(())
    }

    async fn fire(&mut self, deadline: Millis) -> Result<()> {
        self.wait_until(deadline).await;
        self.controller.tick(deadline)?;
        self.pump(deadline)
    }

    async fn wait_until(&self, at: Millis) {
        if let Some(started) = self.started {
            tokio::time::sleep_until(started + at.as_duration()).await;
        }
    }

    /// Deliver host echoes until the host goes quiet.
    fn pump(&mut self, now: Millis) -> Result<()> {
        loop {
            let events = self.controller.host_mut().drain_events();
            if events.is_empty() {
                return Ok(());
            }
            for event in events {
                self.controller.dispatch(event, now)?;
            }
        }
    }

    fn apply(&mut self, action: &Action, now: Millis) -> Result<()> {
        tracing::debug!(at = %now, ?action, "replay step");
        match action {
            Action::Open { url, id: Some(id) } => {
                self.controller.open_window_as(WindowId::from(id.as_str()), url)
            }
            Action::Open { url, id: None } => self.controller.open_window(url).map(|_| ()),
            Action::Move { id, x, y } => {
                let id = WindowId::from(id.as_str());
                let Some(event) = self.controller.host_mut().user_move(&id, *x, *y) else {
                    skip_unknown(&id);
                    return Ok(());
                };
                self.controller.dispatch(event, now)
            }
            Action::Resize { id, width, height } => {
                let id = WindowId::from(id.as_str());
                let Some(event) = self.controller.host_mut().user_resize(&id, *width, *height)
                else {
                    skip_unknown(&id);
                    return Ok(());
                };
                self.controller.dispatch(event, now)
            }
            Action::Minimize { id } => self.host_command(id, |host, id| host.minimize(id)),
            Action::Maximize { id } => self.host_command(id, |host, id| host.maximize(id)),
            Action::Close { id } => self.host_command(id, |host, id| host.close(id)),
            Action::Restore { id } => self
                .controller
                .dispatch(HostEvent::Restored(WindowId::from(id.as_str())), now),
            Action::ResetSize { id } => self
                .controller
                .reset_size(&WindowId::from(id.as_str()), now),
            Action::Viewport { width, height } => {
                self.viewport.set(Viewport::new(*width, *height));
                self.controller.on_viewport_changed(now)
            }
        }
    }

    /// A user click on window chrome: the host changes the window and
    /// reports it, and the report reaches the controller on the next pump.
    fn host_command(
        &mut self,
        id: &str,
        command: impl FnOnce(&mut HeadlessHost, &WindowId) -> gridsnap_core::host::Result<()>,
    ) -> Result<()> {
        let id = WindowId::from(id);
        let host = self.controller.host_mut();
        if host.frame(&id).is_none() {
            skip_unknown(&id);
            return Ok(());
        }
        command(host, &id)?;
        Ok(())
    }
}

fn skip_unknown(id: &WindowId) {
    tracing::warn!(window = %id, "replay step names a window that is not open, skipped");
}
