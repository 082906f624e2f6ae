//! JavaScript-facing API
//!
//! Thin `#[wasm_bindgen]` wrappers over the Rust helpers. Names follow the
//! JavaScript conventions (`getRect`, `inViewport`, `doubleRaf`, ...) and
//! errors cross the boundary as string `JsValue`s.
//!
//! # Module Structure
//!
//! - `helpers`: serialization and argument checks shared by the wrappers
//! - `frame`: animation-frame requests and frame promises
//! - `geometry`: rects, computed style and the viewport test
//! - `scroll`: scroll-ancestor lookup
//! - `style`: scroll offsets, events, classnames and BEM namespaces

pub mod helpers;
pub mod frame;
pub mod geometry;
pub mod scroll;
pub mod style;

pub use frame::{request_animation_frame, cancel_animation_frame, raf, double_raf};
pub use geometry::{get_rect, get_style, in_viewport};
pub use scroll::{get_parent_scroller, get_all_parent_scroller};
pub use style::{get_scroll_top, get_scroll_left, prevent_default, classes, create_namespace, BemNamespace};
