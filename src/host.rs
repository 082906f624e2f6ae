//! Access to the browser globals
//!
//! Missing globals are reported as `HostUnavailable` at call time.

use web_sys::Window;

use crate::error::{DomError, Result};

pub fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| {
        log::error!("no global `window` available");
        DomError::HostUnavailable("window")
    })
}
