use crate::coords::Vec2;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Stroked (closed) triangle outline payload.
///
/// Recorded as one command so the stream mirrors one `stroke()` per triangle;
/// the segment renderer lowers it to three edges at draw time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleCmd {
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
    pub stroke: Stroke,
}

impl TriangleCmd {
    #[inline]
    pub const fn new(p1: Vec2, p2: Vec2, p3: Vec2, stroke: Stroke) -> Self {
        Self { p1, p2, p3, stroke }
    }

    /// The three edges in stroke order (`p1-p2`, `p2-p3`, `p3-p1`).
    #[inline]
    pub fn edges(&self) -> [(Vec2, Vec2); 3] {
        [(self.p1, self.p2), (self.p2, self.p3), (self.p3, self.p1)]
    }
}

impl DrawList {
    /// Records a stroked triangle outline.
    #[inline]
    pub fn push_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2, stroke: Stroke) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(p1, p2, p3, stroke)));
    }
}
