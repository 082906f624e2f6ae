//! Browser DOM tests
//!
//! Run with `wasm-pack test --headless --firefox` (or chrome).

#![cfg(target_arch = "wasm32")]

use dom_geometry_wasm::api;
use dom_geometry_wasm::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, Node};

wasm_bindgen_test_configure!(run_in_browser);

fn create_div() -> HtmlElement {
    web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn body() -> HtmlElement {
    web_sys::window().unwrap().document().unwrap().body().unwrap()
}

fn as_node(el: &HtmlElement) -> &Node {
    el.as_ref()
}

fn as_element(el: &HtmlElement) -> &Element {
    el.as_ref()
}

#[wasm_bindgen_test]
fn test_read_rect_for_element() {
    let element = create_div();
    element.style().set_property("width", "40px").unwrap();
    element.style().set_property("height", "10px").unwrap();
    body().append_child(&element).unwrap();

    let rect = read_rect(as_element(&element)).unwrap();
    assert_eq!(rect.width, 40.0);
    assert_eq!(rect.right, rect.left + rect.width);
    assert_eq!(rect.bottom, rect.top + rect.height);

    body().remove_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_read_rect_for_viewport() {
    let window = web_sys::window().unwrap();
    let width = window.inner_width().unwrap().as_f64().unwrap();
    let height = window.inner_height().unwrap().as_f64().unwrap();

    assert_eq!(read_rect(RectTarget::Viewport).unwrap(), Rect::viewport(width, height));
}

#[wasm_bindgen_test]
fn test_viewport_rect_ignores_document_scroll() {
    let window = web_sys::window().unwrap();
    let spacer = create_div();
    spacer.style().set_property("height", "5000px").unwrap();
    body().append_child(&spacer).unwrap();

    window.scroll_to_with_x_and_y(0.0, 200.0);
    assert!(window.page_y_offset().unwrap() > 0.0);

    let rect = read_rect(RectTarget::Viewport).unwrap();
    assert_eq!(rect.top, 0.0);
    assert_eq!(rect.y, 0.0);
    assert_eq!(rect.left, 0.0);
    assert_eq!(rect.height, window.inner_height().unwrap().as_f64().unwrap());

    let js_rect = api::get_rect(window.clone().into()).unwrap();
    assert_eq!(js_sys::Reflect::get(&js_rect, &"top".into()).unwrap(), JsValue::from(0.0));
    assert_eq!(js_sys::Reflect::get(&js_rect, &"y".into()).unwrap(), JsValue::from(0.0));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    body().remove_child(&spacer).unwrap();
}

#[wasm_bindgen_test]
fn test_get_rect_accepts_window() {
    let window = web_sys::window().unwrap();
    let rect = api::get_rect(window.clone().into()).unwrap();
    let width = js_sys::Reflect::get(&rect, &"width".into()).unwrap();
    assert_eq!(width, window.inner_width().unwrap());

    assert!(api::get_rect(JsValue::from_str("nope")).is_err());
}

#[wasm_bindgen_test]
fn test_in_viewport_fixed_at_origin() {
    let element = create_div();
    let style = element.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("top", "0").unwrap();
    style.set_property("left", "0").unwrap();
    style.set_property("width", "10px").unwrap();
    style.set_property("height", "10px").unwrap();
    body().append_child(&element).unwrap();

    assert!(is_in_viewport(&element).unwrap());

    body().remove_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_in_viewport_right_of_viewport() {
    let element = create_div();
    let style = element.style();
    style.set_property("position", "fixed").unwrap();
    style.set_property("top", "0").unwrap();
    style.set_property("left", "100vw").unwrap();
    style.set_property("width", "10px").unwrap();
    style.set_property("height", "10px").unwrap();
    body().append_child(&element).unwrap();

    assert!(!is_in_viewport(&element).unwrap());

    body().remove_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_get_style() {
    let element = create_div();
    body().append_child(&element).unwrap();

    let style = read_computed_style(&element).unwrap();
    assert_eq!(style.get_property_value("display").unwrap(), "block");

    body().remove_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_parent_scroller_found() {
    let parent = create_div();
    parent.style().set_property("overflow-y", "scroll").unwrap();
    body().append_child(&parent).unwrap();

    let child = create_div();
    parent.append_child(&child).unwrap();

    let nearest = find_nearest_scroll_ancestor(as_node(&child)).unwrap();
    assert_eq!(nearest.node(), Some(as_node(&parent)));

    body().remove_child(&parent).unwrap();
}

#[wasm_bindgen_test]
fn test_parent_scroller_not_found() {
    let child = create_div();
    assert!(find_nearest_scroll_ancestor(as_node(&child)).unwrap().is_viewport());

    let scroller = api::get_parent_scroller(&child).unwrap();
    assert!(scroller.is_instance_of::<web_sys::Window>());
}

#[wasm_bindgen_test]
fn test_all_parent_scrollers() {
    let parent1 = create_div();
    parent1.style().set_property("overflow-y", "scroll").unwrap();
    let parent2 = create_div();
    body().append_child(&parent1).unwrap();
    parent1.append_child(&parent2).unwrap();

    let child = create_div();
    parent2.append_child(&child).unwrap();

    let chain = find_all_scroll_ancestors(as_node(&child)).unwrap();
    assert_eq!(chain.len(), 2);
    assert_eq!(chain[0].node(), Some(as_node(&parent1)));
    assert!(chain[1].is_viewport());

    let js_chain = api::get_all_parent_scroller(&child).unwrap();
    assert_eq!(js_chain.length(), 2);
    assert!(js_chain.get(1).is_instance_of::<web_sys::Window>());

    body().remove_child(&parent1).unwrap();
}

#[wasm_bindgen_test]
fn test_horizontal_overflow_is_ignored() {
    let parent = create_div();
    parent.style().set_property("overflow-x", "scroll").unwrap();
    parent.style().set_property("overflow-y", "hidden").unwrap();
    body().append_child(&parent).unwrap();

    let child = create_div();
    parent.append_child(&child).unwrap();

    assert!(find_nearest_scroll_ancestor(as_node(&child)).unwrap().is_viewport());

    body().remove_child(&parent).unwrap();
}

#[wasm_bindgen_test]
fn test_scroll_offsets() {
    let parent = create_div();
    let style = parent.style();
    style.set_property("overflow", "scroll").unwrap();
    style.set_property("width", "50px").unwrap();
    style.set_property("height", "50px").unwrap();
    let inner = create_div();
    inner.style().set_property("width", "500px").unwrap();
    inner.style().set_property("height", "500px").unwrap();
    parent.append_child(&inner).unwrap();
    body().append_child(&parent).unwrap();

    js_sys::Reflect::set(&parent, &"scrollTop".into(), &100.into()).unwrap();
    js_sys::Reflect::set(&parent, &"scrollLeft".into(), &50.into()).unwrap();
    assert_eq!(style::scroll_top(as_element(&parent)).unwrap(), 100.0);
    assert_eq!(style::scroll_left(as_element(&parent)).unwrap(), 50.0);

    body().remove_child(&parent).unwrap();
}

#[wasm_bindgen_test]
fn test_prevent_default_respects_cancelable() {
    let init = web_sys::EventInit::new();
    init.set_cancelable(true);
    let cancelable = web_sys::Event::new_with_event_init_dict("test", &init).unwrap();
    assert!(style::prevent_default(&cancelable));
    assert!(cancelable.default_prevented());

    let plain = web_sys::Event::new("test").unwrap();
    assert!(!style::prevent_default(&plain));
    assert!(!plain.default_prevented());
}

#[wasm_bindgen_test]
fn test_classes_from_js() {
    let items = js_sys::Array::new();
    items.push(&"class1".into());
    items.push(&js_sys::Array::of2(&JsValue::TRUE, &"class2".into()));
    items.push(&js_sys::Array::of3(&JsValue::FALSE, &"class3".into(), &"class4".into()));

    let result = api::classes(items).unwrap();
    let names: Vec<String> = result.iter().filter_map(|v| v.as_string()).collect();
    assert_eq!(names, vec!["class1", "class2", "class4"]);
}

#[wasm_bindgen_test]
fn test_create_namespace_from_js() {
    let ns = api::create_namespace("var", "button");
    assert_eq!(ns.n(None), "var-button");
    assert_eq!(ns.n(Some("element".into())), "var-button__element");
    assert_eq!(ns.name(), "VarButton");
}

#[wasm_bindgen_test]
async fn test_await_double_frame_on_window() {
    await_frame().await.unwrap();
    await_double_frame().await.unwrap();
}

#[wasm_bindgen_test]
async fn test_window_host_releases_closures() {
    use dom_geometry_wasm::frame::WindowFrameHost;

    let host = WindowFrameHost::new();
    let token = host.request(Box::new(|| {})).unwrap();
    assert_eq!(host.pending(), 1);

    host.cancel(token);
    assert_eq!(host.pending(), 0);
    host.cancel(token);

    let scheduler = FrameScheduler::new(host.clone());
    scheduler.request_frame(|| {}).unwrap();
    assert_eq!(host.pending(), 1);
    scheduler.await_double_frame().await.unwrap();
    assert_eq!(host.pending(), 0);
}

#[wasm_bindgen_test]
async fn test_canceled_frame_does_not_fire() {
    use std::cell::Cell;
    use std::rc::Rc;

    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    let token = request_frame(move || flag.set(true)).unwrap();
    cancel_frame(token);
    cancel_frame(token);

    await_double_frame().await.unwrap();
    assert!(!fired.get());
}
