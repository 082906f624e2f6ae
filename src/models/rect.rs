//! Normalized bounding boxes
//!
//! A `Rect` is produced fresh on every geometry query and never mutated.
//! All coordinates are pixels relative to the viewport origin.

use serde::Serialize;

/// Bounding box with derived edges
///
/// Field order matches the shape returned to JavaScript:
/// `x, y, top, left, right, bottom, width, height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Build a rect from its origin and size; edges are derived
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            x: left,
            y: top,
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// The viewport, always anchored at the origin regardless of scroll offset
    pub fn viewport(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// True when width or height is zero (or negative)
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Strict overlap test against a viewport rect
    ///
    /// Touching edges do not count, and a degenerate rect never intersects.
    pub fn intersects(&self, viewport: &Rect) -> bool {
        if self.is_degenerate() {
            return false;
        }

        let x_overlap = self.right > viewport.left && self.left < viewport.right;
        let y_overlap = self.bottom > viewport.top && self.top < viewport.bottom;
        x_overlap && y_overlap
    }
}

impl From<&web_sys::DomRect> for Rect {
    fn from(r: &web_sys::DomRect) -> Self {
        Self {
            x: r.x(),
            y: r.y(),
            top: r.top(),
            left: r.left(),
            right: r.right(),
            bottom: r.bottom(),
            width: r.width(),
            height: r.height(),
        }
    }
}

/// What a geometry read measures
#[derive(Debug, Clone, Copy)]
pub enum RectTarget<'a> {
    Element(&'a web_sys::Element),
    Viewport,
}

impl<'a> From<&'a web_sys::Element> for RectTarget<'a> {
    fn from(el: &'a web_sys::Element) -> Self {
        RectTarget::Element(el)
    }
}
