//! Error types for DOM helper operations
//!
//! Host-capability failures are fatal and surfaced at call time. Degenerate
//! geometry is never an error, and canceling a stale frame token is a no-op,
//! so neither appears here.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised by the geometry, scroll and frame helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// A required host object (window, document, rAF) is missing
    #[error("host capability unavailable: {0}")]
    HostUnavailable(&'static str),

    /// A host call threw
    #[error("host call failed: {0}")]
    Js(String),

    /// The frame host discarded an awaited callback without running it
    #[error("frame callback dropped before it fired")]
    FrameDropped,
}

pub type Result<T> = std::result::Result<T, DomError>;

impl DomError {
    /// Wrap a thrown `JsValue`, keeping its message when it has one
    pub fn from_js(value: JsValue) -> Self {
        let msg = value
            .as_string()
            .or_else(|| {
                value
                    .dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", value));
        DomError::Js(msg)
    }
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        let msg = err.to_string();
        log::error!("{}", msg);
        JsValue::from_str(&msg)
    }
}
