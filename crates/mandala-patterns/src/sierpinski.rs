//! Subdivided-triangle (Sierpinski) generator.
//!
//! Classic corner subdivision: stroke the outline, split the edges at their
//! midpoints, recurse into the three corner sub-triangles. The central
//! inverted triangle is never stroked, leaving the fractal's signature gap.
//!
//! Termination is depth-only: side length strictly halves per level, so no
//! size cutoff is needed at the depths this system uses.

use mandala_engine::coords::Vec2;
use mandala_engine::scene::Canvas;

use crate::{geom, palette};

/// Fixed outline width. Not depth-scaled, unlike the other generators.
pub const LINE_WIDTH: f32 = 2.0;

/// Recursively strokes a subdivided triangle. No-op when `depth > max_depth`.
pub fn render(canvas: &mut Canvas, p1: Vec2, p2: Vec2, p3: Vec2, depth: u32, max_depth: u32) {
    if depth > max_depth {
        return;
    }

    canvas.set_stroke(palette::depth_color(depth));
    canvas.set_line_width(LINE_WIDTH);
    canvas.stroke_triangle(p1, p2, p3);

    let m12 = geom::midpoint(p1, p2);
    let m23 = geom::midpoint(p2, p3);
    let m31 = geom::midpoint(p3, p1);

    render(canvas, p1, m12, m31, depth + 1, max_depth);
    render(canvas, m12, p2, m23, depth + 1, max_depth);
    render(canvas, m31, m23, p3, depth + 1, max_depth);
}
