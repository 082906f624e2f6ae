//! Frame host driven by explicit ticks

use std::cell::{Cell, RefCell};
use std::fmt;

use super::{FrameCallback, FrameHost, FrameToken};
use crate::error::Result;

/// Deterministic frame host
///
/// Each `tick` is one frame boundary: it runs every callback that was pending
/// when the tick started. Callbacks requested while a tick is running wait
/// for the next tick, as they would with a real repaint.
pub struct ManualFrameHost {
    next_id: Cell<i32>,
    queue: RefCell<Vec<(i32, FrameCallback)>>,
    requested: Cell<usize>,
    fired: Cell<usize>,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self {
            next_id: Cell::new(1),
            queue: RefCell::new(Vec::new()),
            requested: Cell::new(0),
            fired: Cell::new(0),
        }
    }

    /// Fire one frame, returning how many callbacks ran
    ///
    /// A callback canceled by an earlier callback of the same tick is skipped.
    pub fn tick(&self) -> usize {
        let due: Vec<i32> = self.queue.borrow().iter().map(|(id, _)| *id).collect();
        let mut count = 0;
        for id in due {
            let Some(callback) = self.take(id) else {
                continue;
            };
            count += 1;
            self.fired.set(self.fired.get() + 1);
            callback();
        }
        count
    }

    fn take(&self, id: i32) -> Option<FrameCallback> {
        let mut queue = self.queue.borrow_mut();
        let index = queue.iter().position(|(queued, _)| *queued == id)?;
        Some(queue.remove(index).1)
    }

    /// Drop every pending callback without running it
    pub fn clear(&self) {
        let dropped = std::mem::take(&mut *self.queue.borrow_mut());
        drop(dropped);
    }

    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Total requests made, including canceled ones
    pub fn requested(&self) -> usize {
        self.requested.get()
    }

    pub fn fired(&self) -> usize {
        self.fired.get()
    }
}

impl Default for ManualFrameHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ManualFrameHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualFrameHost")
            .field("pending", &self.pending())
            .field("requested", &self.requested())
            .field("fired", &self.fired())
            .finish()
    }
}

impl FrameHost for ManualFrameHost {
    fn request(&self, callback: FrameCallback) -> Result<FrameToken> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.requested.set(self.requested.get() + 1);
        self.queue.borrow_mut().push((id, callback));
        Ok(FrameToken(id))
    }

    fn cancel(&self, token: FrameToken) {
        self.queue.borrow_mut().retain(|(id, _)| *id != token.0);
    }
}
