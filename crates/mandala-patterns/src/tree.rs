//! Branching-tree generator.
//!
//! Binary tree of stroked segments. The branch spread oscillates slowly with
//! the clock; every node in a frame reads the same instantaneous value, so
//! the whole tree sways together.

use core::f32::consts::FRAC_PI_6;

use mandala_engine::coords::Vec2;
use mandala_engine::scene::Canvas;

use crate::{geom, palette};

/// Child length as a fraction of the parent's.
pub const SHRINK: f32 = 0.7;

/// Length below which recursion stops (logical pixels).
pub const MIN_LENGTH: f32 = 2.0;

/// Recursively strokes a swaying binary tree.
///
/// Line width grows toward the root (`max_depth - depth + 1`), so trunk
/// segments are thickest. No-op when `depth > max_depth` or
/// `length < MIN_LENGTH`.
pub fn render(
    canvas: &mut Canvas,
    clock: f32,
    origin: Vec2,
    length: f32,
    angle: f32,
    depth: u32,
    max_depth: u32,
) {
    if depth > max_depth || length < MIN_LENGTH {
        return;
    }

    let end = geom::segment_endpoint(origin, length, angle);

    canvas.set_stroke(palette::depth_color(depth));
    canvas.set_line_width(((max_depth - depth + 1) as f32).max(1.0));
    canvas.stroke_segment(origin, end);

    // Oscillating spread, shared by both children and (via the clock) by
    // every node in this frame.
    let branch_angle = FRAC_PI_6 + (clock * 0.5).sin() * 0.1;
    let child_length = length * SHRINK;

    render(canvas, clock, end, child_length, angle - branch_angle, depth + 1, max_depth);
    render(canvas, clock, end, child_length, angle + branch_angle, depth + 1, max_depth);
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;
    use mandala_engine::scene::DrawCmd;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 600.0)
    }

    fn root() -> Vec2 {
        Vec2::new(400.0, 600.0)
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn depth_past_max_is_a_no_op() {
        let mut c = canvas();
        render(&mut c, 0.0, root(), 100.0, -FRAC_PI_2, 7, 6);
        assert!(c.items().is_empty());
    }

    #[test]
    fn short_root_segment_is_a_no_op() {
        let mut c = canvas();
        render(&mut c, 0.0, root(), 1.5, -FRAC_PI_2, 0, 6);
        assert!(c.items().is_empty());
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn segment_count_is_full_binary_tree() {
        // Length 100 stays above the cutoff through depth 5 (100 * 0.7^5 = 16.8).
        for max_depth in 0..=5u32 {
            let mut c = canvas();
            render(&mut c, 0.4, root(), 100.0, -FRAC_PI_2, 0, max_depth);
            let expected = 2usize.pow(max_depth + 1) - 1;
            assert_eq!(c.items().len(), expected, "max_depth={max_depth}");
        }
    }

    #[test]
    fn length_cutoff_prunes_deep_levels() {
        // Length 3: children are 2.1, grandchildren 1.47 < 2, two levels only.
        let mut c = canvas();
        render(&mut c, 0.0, root(), 3.0, -FRAC_PI_2, 0, 20);
        assert_eq!(c.items().len(), 1 + 2);
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[test]
    fn root_segment_is_thickest() {
        let mut c = canvas();
        render(&mut c, 0.0, root(), 100.0, -FRAC_PI_2, 0, 3);

        let widths: Vec<f32> = c
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Segment(s) => s.stroke.width,
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(widths[0], 4.0); // max_depth - 0 + 1
        assert!(widths.iter().all(|&w| w <= widths[0]));
        // Leaves carry width 1.
        assert_eq!(*widths.last().unwrap(), 1.0);
    }

    #[test]
    fn trunk_points_along_the_given_angle() {
        let mut c = canvas();
        render(&mut c, 0.0, root(), 100.0, -FRAC_PI_2, 0, 0);

        let DrawCmd::Segment(s) = &c.items()[0] else { panic!("expected segment") };
        assert_eq!(s.a, root());
        assert!((s.b.x - 400.0).abs() < 1e-3);
        assert!((s.b.y - 500.0).abs() < 1e-3);
    }

    // ── determinism / clock coupling ──────────────────────────────────────

    #[test]
    fn identical_inputs_yield_identical_streams() {
        let mut a = canvas();
        let mut b = canvas();
        render(&mut a, 3.21, root(), 90.0, -FRAC_PI_2, 0, 4);
        render(&mut b, 3.21, root(), 90.0, -FRAC_PI_2, 0, 4);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn clock_changes_branch_spread() {
        let mut a = canvas();
        let mut b = canvas();
        render(&mut a, 0.0, root(), 90.0, -FRAC_PI_2, 0, 2);
        render(&mut b, 1.0, root(), 90.0, -FRAC_PI_2, 0, 2);
        // Trunk is identical, branches diverge.
        assert_eq!(a.items()[0], b.items()[0]);
        assert_ne!(a.items(), b.items());
    }
}
