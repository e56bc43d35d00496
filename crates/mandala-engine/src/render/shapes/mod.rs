//! Shape renderers.

mod common;

pub mod circle;
pub mod segment;

pub use circle::CircleRenderer;
pub use segment::SegmentRenderer;
