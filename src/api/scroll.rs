//! Scroll-ancestor API
//!
//! The viewport sentinel is returned to JavaScript as the `window` object.

use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, Node};

use crate::host::window;
use crate::models::ScrollTarget;
use crate::scroll;

fn to_js(target: ScrollTarget<Node>) -> Result<JsValue, JsValue> {
    match target {
        ScrollTarget::Ancestor(node) => Ok(node.into()),
        ScrollTarget::Viewport => Ok(window()?.into()),
    }
}

/// Nearest scrollable ancestor element, or `window`
#[wasm_bindgen(js_name = getParentScroller)]
pub fn get_parent_scroller(element: &Element) -> Result<JsValue, JsValue> {
    let node: &Node = element.as_ref();
    to_js(scroll::find_nearest_scroll_ancestor(node)?)
}

/// All scrollable ancestors, nearest first, ending with `window`
#[wasm_bindgen(js_name = getAllParentScroller)]
pub fn get_all_parent_scroller(element: &Element) -> Result<Array, JsValue> {
    let node: &Node = element.as_ref();
    let result = Array::new();
    for target in scroll::find_all_scroll_ancestors(node)? {
        result.push(&to_js(target)?);
    }
    Ok(result)
}
