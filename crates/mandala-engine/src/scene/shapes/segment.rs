use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Stroked line segment payload.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SegmentCmd {
    pub a: Vec2,
    pub b: Vec2,
    pub stroke: Stroke,
}

impl SegmentCmd {
    #[inline]
    pub const fn new(a: Vec2, b: Vec2, stroke: Stroke) -> Self {
        Self { a, b, stroke }
    }
}

impl DrawList {
    /// Records a stroked line segment.
    #[inline]
    pub fn push_segment(&mut self, a: Vec2, b: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Segment(SegmentCmd::new(a, b, stroke)));
    }
}
