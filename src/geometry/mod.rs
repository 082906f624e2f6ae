//! Geometry reads and the viewport intersection test
//!
//! Reads reflect layout at call time. Callers that just changed the DOM
//! should settle layout first, e.g. with `frame::await_double_frame`.

use wasm_bindgen::JsValue;
use web_sys::{CssStyleDeclaration, Element};

use crate::error::{DomError, Result};
use crate::host::window;
use crate::models::{Rect, RectTarget};

/// Bounding box of an element, or the viewport at the origin
pub fn read_rect<'a>(target: impl Into<RectTarget<'a>>) -> Result<Rect> {
    match target.into() {
        RectTarget::Element(element) => Ok(Rect::from(&element.get_bounding_client_rect())),
        RectTarget::Viewport => viewport_rect(),
    }
}

/// `{0, 0, innerWidth, innerHeight}`, independent of scroll offset
pub fn viewport_rect() -> Result<Rect> {
    let window = window()?;
    let width = number(window.inner_width(), "innerWidth")?;
    let height = number(window.inner_height(), "innerHeight")?;
    Ok(Rect::viewport(width, height))
}

fn number(value: std::result::Result<JsValue, JsValue>, what: &str) -> Result<f64> {
    value
        .map_err(DomError::from_js)?
        .as_f64()
        .ok_or_else(|| DomError::Js(format!("{} is not a number", what)))
}

/// Live computed style; read properties immediately
pub fn read_computed_style(element: &Element) -> Result<CssStyleDeclaration> {
    let style = window()?
        .get_computed_style(element)
        .map_err(DomError::from_js)?;
    require_style(style)
}

fn require_style(style: Option<CssStyleDeclaration>) -> Result<CssStyleDeclaration> {
    style.ok_or_else(|| DomError::Js("element has no computed style".to_string()))
}

/// True when the element overlaps the viewport on both axes
pub fn is_in_viewport(element: &Element) -> Result<bool> {
    let rect = read_rect(element)?;
    let viewport = read_rect(RectTarget::Viewport)?;
    let visible = rect.intersects(&viewport);

    log::trace!("in viewport: {} ({:?})", visible, rect);
    Ok(visible)
}
