//! Window lifecycle: open, attach, minimize / maximize / restore, reset, close.

use std::sync::LazyLock;

use gridsnap_common::{GridsnapError, Millis, Rect, Result, WindowId};
use regex::Regex;

use crate::host::{Appearance, WindowHost};
use crate::persist::StateSink;
use crate::state::{WindowPatch, WindowState};
use crate::viewport::ViewportSource;

use super::{Axis, SnapController};

static SCHEME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

/// Trim `raw` and prefix `http://` unless it already names an http(s) scheme.
fn normalize_url(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if SCHEME_RE.is_match(trimmed) {
        Some(trimmed.to_string())
    } else {
        Some(format!("http://{trimmed}"))
    }
}

impl<H, V, S> SnapController<H, V, S>
where
    H: WindowHost,
    V: ViewportSource,
    S: StateSink,
{
    /// Open a new window on `url` with a fresh id.
    pub fn open_window(&mut self, url: &str) -> Result<WindowId> {
        let id = WindowId::new();
        self.open_window_as(id.clone(), url)?;
        Ok(id)
    }

    /// Open a new window with a caller-chosen id, cascaded from the top-left
    /// by the number of windows already open.
    pub fn open_window_as(&mut self, id: WindowId, url: &str) -> Result<()> {
        let url = normalize_url(url)
            .ok_or_else(|| GridsnapError::Other("cannot open a window without a url".into()))?;

        let (x, y) = self.placement.origin_for(self.state.len());
        let frame = Rect::new(x, y, self.placement.width, self.placement.height);
        self.host.open(&id, frame, &url)?;

        let mut window = WindowState::new(id.clone(), url, frame);
        if let Some(cell) = self.cell_size() {
            window.refresh_grid(cell);
        }
        tracing::info!(window = %id, url = %window.url, x, y, "window opened");
        self.state.insert(window);
        self.persist()
    }

    /// Create every window of the loaded page state on the host and replay
    /// its stored flags.
    ///
    /// A window the host refuses is logged and skipped; if it never made it
    /// onto the host it is dropped from the page state too.
    pub fn attach_all(&mut self) -> Result<()> {
        let cell = self.cell_size();
        let default_size = (self.placement.width, self.placement.height);

        for id in self.state.window_ids() {
            let Some(window) = self.state.window_mut(&id) else {
                continue;
            };
            window.fill_defaults(default_size, cell);
            if window.is_minimized && window.saved_url.is_empty() {
                window.saved_url = window.url.clone();
            }
            let window = window.clone();

            if let Err(e) = self.attach_window(&window) {
                tracing::warn!(window = %id, error = %e, "could not attach persisted window, skipped");
                if self.host.frame(&id).is_none() {
                    self.forget(&id);
                    self.state.remove(&id);
                }
            }
        }

        tracing::info!(windows = self.state.len(), "attached persisted windows");
        self.persist()
    }

    fn attach_window(&mut self, window: &WindowState) -> Result<()> {
        let id = &window.id;
        self.host.open(id, window.frame(), &window.url)?;
        if window.is_minimized {
            self.host.minimize(id)?;
            self.host.set_content(id, None)?;
            self.host.set_appearance(id, Appearance::Minimized)?;
        } else if window.is_maximized {
            self.host.maximize(id)?;
            self.restore_content(id, &window.saved_url)?;
        } else if !window.saved_url.is_empty() {
            self.host.set_content(id, Some(&window.saved_url))?;
        }
        Ok(())
    }

    /// The user minimized the window.
    pub fn on_minimize(&mut self, id: &WindowId) -> Result<()> {
        let live = self.host.frame(id);
        let content = self.host.content(id);
        let Some(window) = self.state.window_mut(id) else {
            tracing::debug!(window = %id, "minimize for unknown window ignored");
            return Ok(());
        };
        if window.is_minimized {
            return Ok(());
        }

        let current = window.frame();
        window.saved_before_minimize = Some(live.unwrap_or(current));
        window.is_minimized = true;
        window.is_maximized = false;
        if window.saved_url.is_empty() {
            let url = window.url.clone();
            window.saved_url = content.unwrap_or(url);
        }

        self.host.set_content(id, None)?;
        self.host.set_appearance(id, Appearance::Minimized)?;
        tracing::info!(window = %id, "window minimized");
        self.persist()
    }

    /// The user maximized the window.
    pub fn on_maximize(&mut self, id: &WindowId) -> Result<()> {
        let Some(window) = self.state.window_mut(id) else {
            tracing::debug!(window = %id, "maximize for unknown window ignored");
            return Ok(());
        };
        if window.is_maximized {
            return Ok(());
        }
        window.is_maximized = true;
        window.is_minimized = false;
        let saved_url = window.saved_url.clone();

        self.restore_content(id, &saved_url)?;
        self.host.set_appearance(id, Appearance::Normal)?;
        tracing::info!(window = %id, "window maximized");
        self.persist()
    }

    /// The user restored the window from minimized or maximized.
    pub fn on_restore(&mut self, id: &WindowId, now: Millis) -> Result<()> {
        let Some(window) = self.state.window_mut(id) else {
            tracing::debug!(window = %id, "restore for unknown window ignored");
            return Ok(());
        };
        if !window.is_minimized && !window.is_maximized {
            return Ok(());
        }
        window.is_minimized = false;
        window.is_maximized = false;
        let saved_geometry = window.saved_before_minimize.take();
        let saved_url = window.saved_url.clone();

        if let Some(frame) = saved_geometry {
            self.host.move_to(id, frame.x, frame.y)?;
            self.host.resize(id, frame.width, frame.height)?;
            let cell = self.cell_size();
            self.state.apply(id, WindowPatch::frame(frame), cell);
            self.arm_guard(id, Axis::Position, now);
            self.arm_guard(id, Axis::Dimension, now);
        }

        self.restore_content(id, &saved_url)?;
        self.host.set_appearance(id, Appearance::Normal)?;
        tracing::info!(window = %id, "window restored");
        self.persist()
    }

    /// Put the window back to the size it was opened with.
    pub fn reset_size(&mut self, id: &WindowId, now: Millis) -> Result<()> {
        let Some(window) = self.state.window(id) else {
            tracing::debug!(window = %id, "reset for unknown window ignored");
            return Ok(());
        };
        let (width, height) = window.original_size();

        self.host.resize(id, width, height)?;
        let cell = self.cell_size();
        self.state.apply(id, WindowPatch::size(width, height), cell);
        self.arm_guard(id, Axis::Dimension, now);
        tracing::info!(window = %id, width, height, "window size reset");
        self.persist()
    }

    /// The host closed the window.
    pub fn on_close(&mut self, id: &WindowId) -> Result<()> {
        self.forget(id);
        if self.state.remove(id).is_none() {
            tracing::debug!(window = %id, "close for unknown window ignored");
            return Ok(());
        }
        tracing::info!(window = %id, "window closed");
        self.persist()
    }

    /// Close the window from our side: drop its state, then tell the host.
    pub fn close_window(&mut self, id: &WindowId) -> Result<()> {
        if !self.state.contains(id) {
            tracing::debug!(window = %id, "close requested for unknown window");
            return Ok(());
        }
        self.on_close(id)?;
        self.host.close(id)?;
        Ok(())
    }

    fn restore_content(&mut self, id: &WindowId, saved_url: &str) -> Result<()> {
        if saved_url.is_empty() {
            return Ok(());
        }
        if self.host.content(id).as_deref() != Some(saved_url) {
            self.host.set_content(id, Some(saved_url))?;
        }
        Ok(())
    }
}
