//! Geometry API

use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Element};

use super::helpers::{element_or_window, serialize, ElementOrWindow};
use crate::geometry;
use crate::models::RectTarget;

/// Bounding rect of an element, or of the viewport when given `window`
#[wasm_bindgen(js_name = getRect)]
pub fn get_rect(target: JsValue) -> Result<JsValue, JsValue> {
    let rect = match element_or_window(&target, "getRect")? {
        ElementOrWindow::Element(element) => geometry::read_rect(element)?,
        ElementOrWindow::Window => geometry::read_rect(RectTarget::Viewport)?,
    };
    serialize(&rect, "Failed to serialize rect")
}

#[wasm_bindgen(js_name = getStyle)]
pub fn get_style(element: &Element) -> Result<CssStyleDeclaration, JsValue> {
    Ok(geometry::read_computed_style(element)?)
}

#[wasm_bindgen(js_name = inViewport)]
pub fn in_viewport(element: &Element) -> Result<bool, JsValue> {
    Ok(geometry::is_in_viewport(element)?)
}
