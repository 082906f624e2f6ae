//! Value types shared by the geometry and scroll helpers

pub mod rect;
pub mod scroll_target;

pub use rect::*;
pub use scroll_target::*;
