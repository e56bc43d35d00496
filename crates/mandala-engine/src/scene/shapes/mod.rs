pub(crate) mod circle;
pub(crate) mod segment;
pub(crate) mod triangle;

pub use circle::CircleCmd;
pub use segment::SegmentCmd;
pub use triangle::TriangleCmd;

use crate::paint::Color;

/// Stroke style captured by every recorded outline.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Line width in logical pixels.
    pub width: f32,
    /// Premultiplied stroke color (global alpha already applied).
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
