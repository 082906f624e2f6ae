//! DOM Geometry WASM Module
//!
//! Browser helpers for layout-sensitive UI code: bounding rects, viewport
//! visibility, scroll-ancestor lookup and animation-frame timing, plus small
//! style, classname and BEM utilities. Everything is usable from Rust and
//! exported to JavaScript through `api`.

pub mod error;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod models;
pub mod scroll;
pub mod style;
pub mod api;

// Re-export commonly used types
pub use error::{DomError, Result};
pub use frame::{await_double_frame, await_frame, cancel_frame, request_frame, FrameHost, FrameScheduler, FrameToken};
pub use geometry::{is_in_viewport, read_computed_style, read_rect};
pub use models::*;
pub use scroll::{find_all_scroll_ancestors, find_nearest_scroll_ancestor, LayoutNode};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"[WASM] logger already initialized".into());
    }

    log::info!("DOM geometry WASM module initialized");
}

/// Change the console log level at runtime
///
/// Accepts `off`, `error`, `warn`, `info`, `debug` or `trace`; anything else
/// falls back to `error`.
#[wasm_bindgen(js_name = setLogLevel)]
pub fn set_log_level(level: &str) {
    log::set_max_level(parse_level_filter(level));
}

fn parse_level_filter(level: &str) -> log::LevelFilter {
    level.parse().unwrap_or(log::LevelFilter::Error)
}
