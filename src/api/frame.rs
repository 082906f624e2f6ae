//! Animation-frame API
//!
//! `raf` and `doubleRaf` return promises. `doubleRaf` requests its second
//! frame from inside the first frame's callback, never both at once.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;

use super::helpers::call_logged;
use crate::error::DomError;
use crate::frame::{self, FrameToken};

/// Schedule `callback` before the next repaint, returning a cancel handle
#[wasm_bindgen(js_name = requestAnimationFrame)]
pub fn request_animation_frame(callback: Function) -> Result<i32, JsValue> {
    let token = frame::request_frame(move || call_logged(&callback, "animation frame callback"))?;
    Ok(token.id())
}

/// Cancel a pending frame; stale handles are ignored
#[wasm_bindgen(js_name = cancelAnimationFrame)]
pub fn cancel_animation_frame(handle: i32) {
    frame::cancel_frame(FrameToken(handle));
}

/// Resolves after the next frame
#[wasm_bindgen]
pub fn raf() -> Promise {
    frames_promise(1)
}

/// Resolves after two sequential frames
#[wasm_bindgen(js_name = doubleRaf)]
pub fn double_raf() -> Promise {
    frames_promise(2)
}

fn frames_promise(frames: u32) -> Promise {
    Promise::new(&mut |resolve, reject| {
        chain_frames(frames, resolve, reject);
    })
}

/// Wait `remaining` frames, requesting each only after the previous one fired
fn chain_frames(remaining: u32, resolve: Function, reject: Function) {
    if remaining == 0 {
        call_logged(&resolve, "frame promise resolve");
        return;
    }

    let on_error = reject.clone();
    let requested = frame::request_frame(move || chain_frames(remaining - 1, resolve, reject));
    if let Err(e) = requested {
        reject_with(&on_error, e);
    }
}

fn reject_with(reject: &Function, err: DomError) {
    let reason: JsValue = err.into();
    if let Err(e) = reject.call1(&JsValue::UNDEFINED, &reason) {
        log::error!("frame promise reject threw: {:?}", e);
    }
}
