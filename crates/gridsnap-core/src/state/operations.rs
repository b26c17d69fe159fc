//! Lookup and mutation of the page state collection.

use gridsnap_common::{GridConfig, WindowId};

use crate::geometry::CellSize;

use super::{PageState, WindowPatch, WindowState};

impl PageState {
    pub fn with_grid(grid: GridConfig) -> Self {
        Self {
            columns: grid.columns,
            rows: grid.rows,
            windows: Vec::new(),
        }
    }

    pub fn grid(&self) -> GridConfig {
        GridConfig {
            columns: self.columns,
            rows: self.rows,
        }
    }

    pub fn window(&self, id: &WindowId) -> Option<&WindowState> {
        self.windows.iter().find(|w| &w.id == id)
    }

    pub fn window_mut(&mut self, id: &WindowId) -> Option<&mut WindowState> {
        self.windows.iter_mut().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WindowId) -> bool {
        self.window(id).is_some()
    }

    pub fn window_ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(|w| w.id.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Add a window. A window with the same id is replaced in place.
    pub fn insert(&mut self, window: WindowState) {
        match self.window_mut(&window.id) {
            Some(existing) => *existing = window,
            None => self.windows.push(window),
        }
    }

    pub fn remove(&mut self, id: &WindowId) -> Option<WindowState> {
        let index = self.windows.iter().position(|w| &w.id == id)?;
        Some(self.windows.remove(index))
    }

    /// Merge `patch` into the window's state. When geometry changes, the
    /// grid-unit mirror is recomputed against `cell`.
    ///
    /// Returns `false` if no window has that id.
    pub fn apply(&mut self, id: &WindowId, patch: WindowPatch, cell: Option<CellSize>) -> bool {
        let Some(window) = self.window_mut(id) else {
            return false;
        };

        if let Some(x) = patch.x {
            window.x = x;
        }
        if let Some(y) = patch.y {
            window.y = y;
        }
        if let Some(width) = patch.width {
            window.width = width;
        }
        if let Some(height) = patch.height {
            window.height = height;
        }

        if patch.touches_geometry() {
            if let Some(cell) = cell {
                window.refresh_grid(cell);
            }
        }
        true
    }
}
