//! Style, event, classname and BEM API

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use super::helpers::{element_or_window, validation_error, ElementOrWindow};
use crate::style::{self, ClassName, Namespace, ScrollSource};

fn scroll_source<'a>(target: &'a JsValue, context: &str) -> Result<ScrollSource<'a>, JsValue> {
    Ok(match element_or_window(target, context)? {
        ElementOrWindow::Element(element) => ScrollSource::Element(element),
        ElementOrWindow::Window => ScrollSource::Window,
    })
}

#[wasm_bindgen(js_name = getScrollTop)]
pub fn get_scroll_top(target: JsValue) -> Result<f64, JsValue> {
    Ok(style::scroll_top(scroll_source(&target, "getScrollTop")?)?)
}

#[wasm_bindgen(js_name = getScrollLeft)]
pub fn get_scroll_left(target: JsValue) -> Result<f64, JsValue> {
    Ok(style::scroll_left(scroll_source(&target, "getScrollLeft")?)?)
}

/// Calls `event.preventDefault()` only for cancelable events
#[wasm_bindgen(js_name = preventDefault)]
pub fn prevent_default(event: &Event) -> bool {
    style::prevent_default(event)
}

/// Resolve a classname list
///
/// Each item is a string, or an array `[condition, truthy, falsy?]`.
#[wasm_bindgen]
pub fn classes(items: Array) -> Result<Array, JsValue> {
    let mut owned: Vec<(bool, String, Option<String>)> = Vec::new();
    for item in items.iter() {
        if let Some(name) = item.as_string() {
            owned.push((true, name, None));
        } else if Array::is_array(&item) {
            let entry = Array::from(&item);
            let truthy = entry
                .get(1)
                .as_string()
                .ok_or_else(|| validation_error("classes: conditional entry needs a class name"))?;
            owned.push((entry.get(0).is_truthy(), truthy, entry.get(2).as_string()));
        } else {
            return Err(validation_error("classes: expected a string or [condition, class, fallback?]"));
        }
    }

    let resolved = style::classes(
        owned
            .iter()
            .map(|(cond, truthy, falsy)| ClassName::Conditional(*cond, truthy, falsy.as_deref())),
    );
    Ok(resolved.into_iter().map(JsValue::from).collect())
}

/// BEM namespace handle for one component
#[wasm_bindgen]
pub struct BemNamespace {
    inner: Namespace,
}

#[wasm_bindgen]
impl BemNamespace {
    /// PascalCase component name
    #[wasm_bindgen(getter)]
    pub fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[wasm_bindgen(getter, js_name = componentName)]
    pub fn component_name(&self) -> String {
        self.inner.component_name().to_string()
    }

    /// Block, element (`"el"`), modifier (`"--mod"`) or namespaced (`"$-x"`) name
    pub fn n(&self, suffix: Option<String>) -> String {
        self.inner.n(suffix.as_deref())
    }
}

#[wasm_bindgen(js_name = createNamespace)]
pub fn create_namespace(namespace: &str, component: &str) -> BemNamespace {
    BemNamespace {
        inner: Namespace::new(namespace, component),
    }
}
