//! In-memory window host.
//!
//! Keeps a live frame per window, obeys every command immediately, and
//! queues the notifications a real widget would emit as a side effect
//! (a programmatic move produces a `Moved` echo, and so on). Used by tests
//! and by the scripted replay driver.

use std::collections::{BTreeMap, VecDeque};

use gridsnap_common::{HostError, Rect, WindowId};

use super::{Appearance, HostCommand, HostEvent, Result, WindowHost};

#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessWindow {
    pub frame: Rect,
    pub url: String,
    pub content: Option<String>,
    pub appearance: Appearance,
    pub minimized: bool,
    pub maximized: bool,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    windows: BTreeMap<WindowId, HeadlessWindow>,
    commands: Vec<HostCommand>,
    outbox: VecDeque<HostEvent>,
    /// Whether programmatic commands queue echo notifications.
    silent: bool,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// A host that never queues echo notifications.
    pub fn silent() -> Self {
        Self {
            silent: true,
            ..Self::default()
        }
    }

    pub fn window(&self, id: &WindowId) -> Option<&HeadlessWindow> {
        self.windows.get(id)
    }

    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Every command received so far, in order.
    pub fn commands(&self) -> &[HostCommand] {
        &self.commands
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    /// Take all queued notifications.
    pub fn drain_events(&mut self) -> Vec<HostEvent> {
        self.outbox.drain(..).collect()
    }

    /// Simulate the user dragging a window; returns the notification to deliver.
    pub fn user_move(&mut self, id: &WindowId, x: f64, y: f64) -> Option<HostEvent> {
        let window = self.windows.get_mut(id)?;
        window.frame.x = x;
        window.frame.y = y;
        Some(HostEvent::Moved(id.clone(), window.frame))
    }

    /// Simulate the user dragging a resize handle; returns the notification to deliver.
    pub fn user_resize(&mut self, id: &WindowId, width: f64, height: f64) -> Option<HostEvent> {
        let window = self.windows.get_mut(id)?;
        window.frame.width = width;
        window.frame.height = height;
        Some(HostEvent::Resized(id.clone(), width, height))
    }

    fn window_mut(&mut self, id: &WindowId) -> Result<&mut HeadlessWindow> {
        self.windows
            .get_mut(id)
            .ok_or_else(|| HostError::UnknownWindow(id.clone()))
    }

    fn echo(&mut self, event: HostEvent) {
        if !self.silent {
            self.outbox.push_back(event);
        }
    }
}

impl WindowHost for HeadlessHost {
    fn open(&mut self, id: &WindowId, frame: Rect, url: &str) -> Result<()> {
        if self.windows.contains_key(id) {
            return Err(HostError::Rejected(format!("window {id} is already open")));
        }
        self.windows.insert(
            id.clone(),
            HeadlessWindow {
                frame,
                url: url.to_string(),
                content: Some(url.to_string()),
                appearance: Appearance::Normal,
                minimized: false,
                maximized: false,
            },
        );
        self.commands.push(HostCommand::Open {
            id: id.clone(),
            frame,
            url: url.to_string(),
        });
        Ok(())
    }

    fn move_to(&mut self, id: &WindowId, x: f64, y: f64) -> Result<()> {
        let window = self.window_mut(id)?;
        window.frame.x = x;
        window.frame.y = y;
        let frame = window.frame;
        self.commands.push(HostCommand::Move { id: id.clone(), x, y });
        self.echo(HostEvent::Moved(id.clone(), frame));
        Ok(())
    }

    fn resize(&mut self, id: &WindowId, width: f64, height: f64) -> Result<()> {
        let window = self.window_mut(id)?;
        window.frame.width = width;
        window.frame.height = height;
        self.commands.push(HostCommand::Resize {
            id: id.clone(),
            width,
            height,
        });
        self.echo(HostEvent::Resized(id.clone(), width, height));
        Ok(())
    }

    fn minimize(&mut self, id: &WindowId) -> Result<()> {
        let window = self.window_mut(id)?;
        window.minimized = true;
        window.maximized = false;
        self.commands.push(HostCommand::Minimize(id.clone()));
        self.echo(HostEvent::Minimized(id.clone()));
        Ok(())
    }

    fn maximize(&mut self, id: &WindowId) -> Result<()> {
        let window = self.window_mut(id)?;
        window.maximized = true;
        window.minimized = false;
        self.commands.push(HostCommand::Maximize(id.clone()));
        self.echo(HostEvent::Maximized(id.clone()));
        Ok(())
    }

    fn close(&mut self, id: &WindowId) -> Result<()> {
        if self.windows.remove(id).is_none() {
            return Err(HostError::UnknownWindow(id.clone()));
        }
        self.commands.push(HostCommand::Close(id.clone()));
        self.echo(HostEvent::Closed(id.clone()));
        Ok(())
    }

    fn frame(&self, id: &WindowId) -> Option<Rect> {
        self.windows.get(id).map(|w| w.frame)
    }

    fn content(&self, id: &WindowId) -> Option<String> {
        self.windows.get(id).and_then(|w| w.content.clone())
    }

    fn set_content(&mut self, id: &WindowId, url: Option<&str>) -> Result<()> {
        let window = self.window_mut(id)?;
        window.content = url.map(str::to_string);
        self.commands.push(HostCommand::SetContent {
            id: id.clone(),
            url: url.map(str::to_string),
        });
        Ok(())
    }

    fn set_appearance(&mut self, id: &WindowId, appearance: Appearance) -> Result<()> {
        let window = self.window_mut(id)?;
        window.appearance = appearance;
        self.commands.push(HostCommand::SetAppearance {
            id: id.clone(),
            appearance,
        });
        Ok(())
    }
}
