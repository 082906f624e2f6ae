//! Animation-frame scheduling
//!
//! The host's "run before next repaint" primitive is injected through the
//! `FrameHost` trait. `WindowFrameHost` drives the browser's
//! `requestAnimationFrame`; `ManualFrameHost` fires frames on demand so that
//! frame ordering can be checked without real repaint timing.

pub mod manual;
pub mod window_host;

pub use manual::ManualFrameHost;
pub use window_host::WindowFrameHost;

use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::{DomError, Result};

/// Callback run once at the next frame boundary
pub type FrameCallback = Box<dyn FnOnce() + 'static>;

/// Opaque handle to a pending frame callback
///
/// Invalidated once the callback fires or is canceled; canceling it again
/// does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameToken(pub(crate) i32);

impl FrameToken {
    /// The host's raw request id
    pub fn id(&self) -> i32 {
        self.0
    }
}

/// A host capable of running callbacks just before the next repaint
pub trait FrameHost {
    fn request(&self, callback: FrameCallback) -> Result<FrameToken>;

    /// Must be a no-op for tokens that already fired or were canceled
    fn cancel(&self, token: FrameToken);
}

impl<H: FrameHost + ?Sized> FrameHost for Rc<H> {
    fn request(&self, callback: FrameCallback) -> Result<FrameToken> {
        (**self).request(callback)
    }

    fn cancel(&self, token: FrameToken) {
        (**self).cancel(token)
    }
}

/// Single and multi-frame waits over a `FrameHost`
#[derive(Debug, Clone, Default)]
pub struct FrameScheduler<H> {
    host: H,
}

impl<H: FrameHost> FrameScheduler<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Run `callback` once before the next repaint
    pub fn request_frame(&self, callback: impl FnOnce() + 'static) -> Result<FrameToken> {
        let token = self.host.request(Box::new(callback))?;
        log::trace!("frame requested: {}", token.id());
        Ok(token)
    }

    pub fn cancel_frame(&self, token: FrameToken) {
        log::trace!("frame canceled: {}", token.id());
        self.host.cancel(token);
    }

    /// Resolve after one frame boundary has passed
    pub async fn await_frame(&self) -> Result<()> {
        let (tx, rx) = oneshot::channel();
        self.request_frame(move || {
            let _ = tx.send(());
        })?;
        rx.await.map_err(|_| DomError::FrameDropped)
    }

    /// Resolve after two frame boundaries, waited one after the other
    ///
    /// The second frame is requested only once the first has fired, so any
    /// layout invalidated during the first frame is committed before the
    /// second one resolves.
    pub async fn await_double_frame(&self) -> Result<()> {
        self.await_frame().await?;
        self.await_frame().await
    }
}

thread_local! {
    static WINDOW_HOST: WindowFrameHost = WindowFrameHost::new();
}

/// Scheduler bound to the current window
///
/// Every call shares one pending table, so a token from `request_frame` can
/// be canceled through any later scheduler.
pub fn window_scheduler() -> FrameScheduler<WindowFrameHost> {
    FrameScheduler::new(WINDOW_HOST.with(WindowFrameHost::clone))
}

pub fn request_frame(callback: impl FnOnce() + 'static) -> Result<FrameToken> {
    window_scheduler().request_frame(callback)
}

pub fn cancel_frame(token: FrameToken) {
    window_scheduler().cancel_frame(token)
}

pub async fn await_frame() -> Result<()> {
    window_scheduler().await_frame().await
}

pub async fn await_double_frame() -> Result<()> {
    window_scheduler().await_double_frame().await
}
