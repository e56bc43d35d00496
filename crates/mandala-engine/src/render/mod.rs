//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw streams and issue GPU commands via wgpu.
//! Each renderer owns its GPU resources (pipeline, buffers).
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down)
//! - vertex shaders convert to NDC using a viewport uniform

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};

use crate::scene::Canvas;
use shapes::{CircleRenderer, SegmentRenderer};

/// Aggregate renderer drawing a full canvas stream.
///
/// Segments (and lowered triangle edges) draw first, circles second; within a
/// renderer, instances keep canvas insertion order.
#[derive(Default)]
pub struct SceneRenderer {
    segments: SegmentRenderer,
    circles: CircleRenderer,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, canvas: &Canvas) {
        self.segments.render(ctx, target, canvas.items());
        self.circles.render(ctx, target, canvas.items());
    }
}
