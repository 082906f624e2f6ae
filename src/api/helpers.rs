//! Shared helpers for the WASM API wrappers

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Window};

/// Serialize a value to JavaScript with automatic error handling
pub fn serialize<T: Serialize>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| {
        let msg = format!("{}: {}", error_context, e);
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    })
}

/// Convert an argument error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    log::error!("{}", msg);
    JsValue::from_str(&msg)
}

/// An argument that may be either an element or the window object
pub enum ElementOrWindow<'a> {
    Element(&'a Element),
    Window,
}

/// Classify an `Element | Window` argument
pub fn element_or_window<'a>(value: &'a JsValue, context: &str) -> Result<ElementOrWindow<'a>, JsValue> {
    if let Some(element) = value.dyn_ref::<Element>() {
        Ok(ElementOrWindow::Element(element))
    } else if value.is_instance_of::<Window>() {
        Ok(ElementOrWindow::Window)
    } else {
        Err(validation_error(format!("{}: expected an element or window", context)))
    }
}

/// Call a JavaScript function with no arguments, logging if it throws
pub fn call_logged(function: &js_sys::Function, context: &str) {
    if let Err(e) = function.call0(&JsValue::UNDEFINED) {
        log::error!("{} threw: {:?}", context, e);
    }
}
