//! Result of a scroll-ancestor lookup

/// A scrollable container, or the viewport sentinel
///
/// The viewport stands for the browsing context's own scrolling area. It is
/// both the fallback when no ancestor scrolls and the last entry of every
/// ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollTarget<N> {
    Ancestor(N),
    Viewport,
}

impl<N> ScrollTarget<N> {
    pub fn is_viewport(&self) -> bool {
        matches!(self, ScrollTarget::Viewport)
    }

    /// The ancestor node, if this is not the viewport
    pub fn node(&self) -> Option<&N> {
        match self {
            ScrollTarget::Ancestor(node) => Some(node),
            ScrollTarget::Viewport => None,
        }
    }
}
