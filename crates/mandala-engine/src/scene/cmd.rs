use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::segment::SegmentCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach a renderer under `render::shapes::*` to consume it
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Circle(CircleCmd),
    Segment(SegmentCmd),
    Triangle(TriangleCmd),
}
