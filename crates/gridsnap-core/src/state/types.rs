//! Persisted page and window state.
//!
//! Field names on the wire are camelCase (underscore-prefixed for bookkeeping
//! fields) so links produced by earlier versions of the page still load.

use std::num::NonZeroU32;

use gridsnap_common::{GridConfig, Rect, WindowId};
use serde::{Deserialize, Serialize};

use crate::geometry::{CellSize, GridRect};

pub const DEFAULT_WINDOW_WIDTH: f64 = 400.0;
pub const DEFAULT_WINDOW_HEIGHT: f64 = 300.0;

fn default_width() -> f64 {
    DEFAULT_WINDOW_WIDTH
}

fn default_height() -> f64 {
    DEFAULT_WINDOW_HEIGHT
}

fn default_columns() -> NonZeroU32 {
    GridConfig::default().columns
}

fn default_rows() -> NonZeroU32 {
    GridConfig::default().rows
}

/// One open floating window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowState {
    pub id: WindowId,
    pub url: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_height")]
    pub height: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_y: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_height: Option<f64>,

    #[serde(default)]
    pub is_minimized: bool,
    #[serde(default)]
    pub is_maximized: bool,

    /// Size restored by the explicit reset action.
    #[serde(rename = "_origWidth", default, skip_serializing_if = "Option::is_none")]
    pub orig_width: Option<f64>,
    #[serde(rename = "_origHeight", default, skip_serializing_if = "Option::is_none")]
    pub orig_height: Option<f64>,
    /// Content reference kept while the embedded page is blanked.
    #[serde(rename = "_savedUrl", default)]
    pub saved_url: String,
    /// Geometry captured when the window was minimized.
    #[serde(
        rename = "_savedBeforeMinimize",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saved_before_minimize: Option<Rect>,

    // Per-component form of `_savedBeforeMinimize` written by older pages.
    // Read only; folded by `fill_defaults`.
    #[serde(rename = "_savedXBeforeMinimize", default, skip_serializing)]
    legacy_saved_x: Option<f64>,
    #[serde(rename = "_savedYBeforeMinimize", default, skip_serializing)]
    legacy_saved_y: Option<f64>,
    #[serde(rename = "_savedWidthBeforeMinimize", default, skip_serializing)]
    legacy_saved_width: Option<f64>,
    #[serde(rename = "_savedHeightBeforeMinimize", default, skip_serializing)]
    legacy_saved_height: Option<f64>,
}

impl WindowState {
    pub fn new(id: WindowId, url: impl Into<String>, frame: Rect) -> Self {
        Self {
            id,
            url: url.into(),
            x: frame.x,
            y: frame.y,
            width: frame.width,
            height: frame.height,
            grid_x: None,
            grid_y: None,
            grid_width: None,
            grid_height: None,
            is_minimized: false,
            is_maximized: false,
            orig_width: Some(frame.width),
            orig_height: Some(frame.height),
            saved_url: String::new(),
            saved_before_minimize: None,
            legacy_saved_x: None,
            legacy_saved_y: None,
            legacy_saved_width: None,
            legacy_saved_height: None,
        }
    }

    pub fn frame(&self) -> Rect {
        Rect {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    pub fn set_frame(&mut self, frame: Rect) {
        self.x = frame.x;
        self.y = frame.y;
        self.width = frame.width;
        self.height = frame.height;
    }

    /// Stored grid-unit geometry, if all four components are known.
    pub fn grid_rect(&self) -> Option<GridRect> {
        Some(GridRect {
            x: self.grid_x?,
            y: self.grid_y?,
            width: self.grid_width?,
            height: self.grid_height?,
        })
    }

    /// Recompute grid units from the current pixel geometry.
    pub fn refresh_grid(&mut self, cell: CellSize) {
        let grid = cell.to_grid_units(self.frame());
        self.grid_x = Some(grid.x);
        self.grid_y = Some(grid.y);
        self.grid_width = Some(grid.width);
        self.grid_height = Some(grid.height);
    }

    /// Size the reset action returns to.
    pub fn original_size(&self) -> (f64, f64) {
        (
            self.orig_width.unwrap_or(self.width),
            self.orig_height.unwrap_or(self.height),
        )
    }

    /// Fill in whatever an older or hand-written state left out.
    ///
    /// A zero width/height falls back to the default size, `_orig*` default to
    /// the current size, and grid units are computed only when absent.
    /// Per-component pre-minimize geometry is folded into
    /// `saved_before_minimize`, missing components taken from the frame.
    pub fn fill_defaults(&mut self, default_size: (f64, f64), cell: Option<CellSize>) {
        self.fold_legacy_saved_geometry();
        if self.width <= 0.0 {
            self.width = default_size.0;
        }
        if self.height <= 0.0 {
            self.height = default_size.1;
        }
        if self.orig_width.is_none() {
            self.orig_width = Some(self.width);
        }
        if self.orig_height.is_none() {
            self.orig_height = Some(self.height);
        }
        if self.grid_rect().is_none() {
            if let Some(cell) = cell {
                self.refresh_grid(cell);
            }
        }
    }

    fn fold_legacy_saved_geometry(&mut self) {
        let x = self.legacy_saved_x.take();
        let y = self.legacy_saved_y.take();
        let width = self.legacy_saved_width.take();
        let height = self.legacy_saved_height.take();
        if self.saved_before_minimize.is_some()
            || (x.is_none() && y.is_none() && width.is_none() && height.is_none())
        {
            return;
        }
        self.saved_before_minimize = Some(Rect {
            x: x.unwrap_or(self.x),
            y: y.unwrap_or(self.y),
            width: width.unwrap_or(self.width),
            height: height.unwrap_or(self.height),
        });
    }
}

/// Everything needed to rebuild the page: grid dimensions and open windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageState {
    #[serde(default = "default_columns")]
    pub columns: NonZeroU32,
    #[serde(default = "default_rows")]
    pub rows: NonZeroU32,
    #[serde(default)]
    pub windows: Vec<WindowState>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::with_grid(GridConfig::default())
    }
}

/// Partial update applied to one window, mirroring what each controller
/// decision touches.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowPatch {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl WindowPatch {
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn frame(frame: Rect) -> Self {
        Self {
            x: Some(frame.x),
            y: Some(frame.y),
            width: Some(frame.width),
            height: Some(frame.height),
            ..Self::default()
        }
    }

    pub fn touches_geometry(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.width.is_some() || self.height.is_some()
    }
}
