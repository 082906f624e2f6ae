//! `requestAnimationFrame` backed frame host

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use super::{FrameCallback, FrameHost, FrameToken};
use crate::error::{DomError, Result};
use crate::host::window;

type PendingClosures = Rc<RefCell<HashMap<i32, Closure<dyn FnMut()>>>>;

/// Schedules callbacks on the current window's animation frames
///
/// Each pending request owns its JS closure until it fires or is canceled.
/// Clones share the same pending table.
#[derive(Debug, Clone, Default)]
pub struct WindowFrameHost {
    pending: PendingClosures,
}

impl WindowFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Closures still waiting for their frame
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl FrameHost for WindowFrameHost {
    fn request(&self, callback: FrameCallback) -> Result<FrameToken> {
        let window = window()?;

        let pending = Rc::clone(&self.pending);
        let own_id = Rc::new(Cell::new(None));
        let id_slot = Rc::clone(&own_id);
        let mut callback = Some(callback);

        let closure = Closure::wrap(Box::new(move || {
            let callback = callback.take();
            // Dropping a closure during its own call is deferred by
            // wasm-bindgen until the call returns.
            let _finished = id_slot.get().and_then(|id| pending.borrow_mut().remove(&id));
            if let Some(callback) = callback {
                callback();
            }
        }) as Box<dyn FnMut()>);

        let id = window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .map_err(DomError::from_js)?;
        own_id.set(Some(id));
        self.pending.borrow_mut().insert(id, closure);

        Ok(FrameToken(id))
    }

    fn cancel(&self, token: FrameToken) {
        let removed = self.pending.borrow_mut().remove(&token.0);
        if removed.is_none() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.cancel_animation_frame(token.0) {
            log::warn!("cancelAnimationFrame({}) failed: {:?}", token.0, e);
        }
    }
}
