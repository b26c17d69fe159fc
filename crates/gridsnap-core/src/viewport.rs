//! Where the current viewport size comes from.

use std::cell::Cell;
use std::rc::Rc;

use gridsnap_common::Viewport;

/// Read the viewport size at the moment it is needed. Never cached by callers,
/// since the page can be resized between any two calls.
pub trait ViewportSource {
    fn viewport(&self) -> Viewport;
}

/// A fixed viewport.
impl ViewportSource for Viewport {
    fn viewport(&self) -> Viewport {
        *self
    }
}

/// A viewport shared with whoever receives resize events.
impl ViewportSource for Rc<Cell<Viewport>> {
    fn viewport(&self) -> Viewport {
        self.get()
    }
}
