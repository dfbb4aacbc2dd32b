//! Renderer-agnostic draw commands for one frame.
//!
//! Apps record into a [`DrawList`]; `render::shapes::rect::RectRenderer`
//! consumes it. Shape payloads and their `push_*` helpers live under
//! [`shapes`].

mod list;

pub mod shapes;

pub use list::{DrawItem, DrawList};

use shapes::points::PointsCmd;
use shapes::rect::RectCmd;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Points(PointsCmd),
}

/// Paint layer. Higher layers cover lower ones; within a layer, commands
/// paint in the order they were pushed.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(0);
    pub const CONTENT: ZIndex = ZIndex(10);
}
