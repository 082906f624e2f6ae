//! Style, scroll-offset and event helpers
//!
//! Plain getters over the host DOM plus the pure classname and BEM builders.

pub mod bem;
pub mod classes;

pub use bem::{create_namespace_fn, Namespace};
pub use classes::{classes, ClassName};

use web_sys::{Element, Event};

use crate::error::{DomError, Result};
use crate::host::window;

pub use crate::geometry::read_computed_style as get_style;

/// Where a scroll offset is read from
#[derive(Debug, Clone, Copy)]
pub enum ScrollSource<'a> {
    Element(&'a Element),
    Window,
}

impl<'a> From<&'a Element> for ScrollSource<'a> {
    fn from(el: &'a Element) -> Self {
        ScrollSource::Element(el)
    }
}

/// Vertical scroll offset of an element or the window
pub fn scroll_top<'a>(source: impl Into<ScrollSource<'a>>) -> Result<f64> {
    match source.into() {
        ScrollSource::Element(el) => Ok(f64::from(el.scroll_top())),
        ScrollSource::Window => window()?.page_y_offset().map_err(DomError::from_js),
    }
}

/// Horizontal scroll offset of an element or the window
pub fn scroll_left<'a>(source: impl Into<ScrollSource<'a>>) -> Result<f64> {
    match source.into() {
        ScrollSource::Element(el) => Ok(f64::from(el.scroll_left())),
        ScrollSource::Window => window()?.page_x_offset().map_err(DomError::from_js),
    }
}

/// Cancel the event's default action, only if it can be canceled
///
/// Returns whether `preventDefault` was called.
pub fn prevent_default(event: &Event) -> bool {
    if event.cancelable() {
        event.prevent_default();
        true
    } else {
        false
    }
}
