//! Scroll-ancestor resolution
//!
//! Walks from a node's parent upward and classifies each ancestor by its
//! computed `overflow-y`. The walk stops at the document boundary (the
//! document node, `<html>` or `<body>`), which is represented by the viewport
//! sentinel instead. Nothing is cached between calls.

mod dom;

use crate::error::Result;
use crate::models::ScrollTarget;

/// Vertical overflow values that make a container scrollable
pub const SCROLLABLE_OVERFLOW: [&str; 3] = ["scroll", "auto", "overlay"];

/// The parts of a DOM node the ancestor walk needs
pub trait LayoutNode: Clone {
    fn parent_node(&self) -> Option<Self>;

    /// Document, root element or body: the walk never classifies these
    fn is_document_boundary(&self) -> bool;

    /// Computed `overflow-y`, or `None` for nodes without style (text, fragments)
    fn overflow_y(&self) -> Result<Option<String>>;
}

/// True when a computed `overflow-y` value permits scrolling
pub fn is_scrollable_overflow(value: &str) -> bool {
    let value = value.trim();
    SCROLLABLE_OVERFLOW
        .iter()
        .any(|candidate| value.eq_ignore_ascii_case(candidate))
}

/// Ancestors of `node` below the document boundary, nearest first
fn ancestors<N: LayoutNode>(node: &N) -> impl Iterator<Item = N> {
    std::iter::successors(node.parent_node(), N::parent_node)
        .take_while(|ancestor| !ancestor.is_document_boundary())
}

fn is_scrollable<N: LayoutNode>(node: &N) -> Result<bool> {
    Ok(node
        .overflow_y()?
        .map(|value| is_scrollable_overflow(&value))
        .unwrap_or(false))
}

/// Nearest scrollable ancestor of `node`, or the viewport
///
/// `node` itself is never tested.
pub fn find_nearest_scroll_ancestor<N: LayoutNode>(node: &N) -> Result<ScrollTarget<N>> {
    for ancestor in ancestors(node) {
        if is_scrollable(&ancestor)? {
            return Ok(ScrollTarget::Ancestor(ancestor));
        }
    }
    Ok(ScrollTarget::Viewport)
}

/// Every scrollable ancestor of `node`, nearest first, then the viewport
///
/// The viewport is appended unconditionally, so the chain is never empty.
pub fn find_all_scroll_ancestors<N: LayoutNode>(node: &N) -> Result<Vec<ScrollTarget<N>>> {
    let mut chain = Vec::new();
    for ancestor in ancestors(node) {
        if is_scrollable(&ancestor)? {
            chain.push(ScrollTarget::Ancestor(ancestor));
        }
    }
    chain.push(ScrollTarget::Viewport);

    log::debug!("scroll ancestor chain length: {}", chain.len());
    Ok(chain)
}
