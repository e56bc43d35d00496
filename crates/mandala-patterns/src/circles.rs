//! Nested-circles generator.
//!
//! Each node strokes one circle, then recurses into six children arranged
//! evenly around its circumference. Child orientation is time-driven and the
//! spin sense flips at every depth, so odd levels counter-rotate against even
//! ones, which is the key visual effect.

use core::f32::consts::TAU;

use mandala_engine::coords::Vec2;
use mandala_engine::scene::Canvas;

use crate::{geom, palette};

/// Children per node. Fixed; not configurable per call.
pub const BRANCHING: u32 = 6;

/// Child radius as a fraction of the parent's.
pub const SHRINK: f32 = 0.4;

/// Radius below which recursion stops (logical pixels).
pub const MIN_RADIUS: f32 = 1.0;

/// Recursively strokes a circle cluster.
///
/// `rotation` orients the child ring; `direction` (`±1`) is the current spin
/// sense and negates at each level. `clock` feeds the time-driven
/// counter-rotation term.
///
/// No-op when `depth > max_depth` or `radius < MIN_RADIUS`.
#[allow(clippy::too_many_arguments)]
pub fn render(
    canvas: &mut Canvas,
    clock: f32,
    center: Vec2,
    radius: f32,
    depth: u32,
    max_depth: u32,
    rotation: f32,
    direction: f32,
) {
    if depth > max_depth || radius < MIN_RADIUS {
        return;
    }

    canvas.set_stroke(palette::depth_color(depth));
    canvas.set_line_width((3.0 - depth as f32 * 0.3).max(1.0));
    canvas.stroke_circle(center, radius);

    let child_radius = radius * SHRINK;
    let angle_step = TAU / BRANCHING as f32;
    // Children counter-rotate against this level; the term reads the clock at
    // call time, so the whole frame shares one instantaneous value.
    let child_rotation = rotation - direction * clock * 0.3;

    for i in 0..BRANCHING {
        let angle = rotation + angle_step * i as f32;
        let child_center = geom::point_on_circle(center, radius - child_radius, angle);

        render(
            canvas,
            clock,
            child_center,
            child_radius,
            depth + 1,
            max_depth,
            child_rotation,
            -direction,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_engine::scene::DrawCmd;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 600.0)
    }

    /// Geometric series of branching factor 6: (6^(d+1) - 1) / 5.
    fn expected_count(max_depth: u32) -> usize {
        (6usize.pow(max_depth + 1) - 1) / 5
    }

    // ── termination ───────────────────────────────────────────────────────

    #[test]
    fn depth_past_max_is_a_no_op() {
        let mut c = canvas();
        render(&mut c, 0.0, Vec2::new(400.0, 300.0), 100.0, 5, 4, 0.0, 1.0);
        assert!(c.items().is_empty());
    }

    #[test]
    fn subunit_radius_at_root_is_a_no_op() {
        let mut c = canvas();
        render(&mut c, 0.0, Vec2::new(400.0, 300.0), 0.5, 0, 4, 0.0, 1.0);
        assert!(c.items().is_empty());
    }

    #[test]
    fn radius_cutoff_prunes_deep_levels() {
        // radius 4: children are 1.6, grandchildren 0.64 < 1, two levels only.
        let mut c = canvas();
        render(&mut c, 0.0, Vec2::new(400.0, 300.0), 4.0, 0, 10, 0.0, 1.0);
        assert_eq!(c.items().len(), 1 + 6);
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn stroke_count_is_geometric_series_of_six() {
        // Radius 100 keeps every node above the cutoff through depth 4
        // (100 * 0.4^4 = 2.56).
        for max_depth in 0..=4 {
            let mut c = canvas();
            render(&mut c, 0.7, Vec2::new(400.0, 300.0), 100.0, 0, max_depth, 0.3, 1.0);
            assert_eq!(c.items().len(), expected_count(max_depth), "max_depth={max_depth}");
        }
    }

    #[test]
    fn every_command_is_a_circle() {
        let mut c = canvas();
        render(&mut c, 0.2, Vec2::new(400.0, 300.0), 100.0, 0, 2, 0.0, 1.0);
        assert!(c.items().iter().all(|cmd| matches!(cmd, DrawCmd::Circle(_))));
    }

    // ── style ─────────────────────────────────────────────────────────────

    #[test]
    fn line_width_decreases_with_depth_floored_at_one() {
        let mut c = canvas();
        render(&mut c, 0.0, Vec2::new(400.0, 300.0), 100.0, 0, 1, 0.0, 1.0);

        let widths: Vec<f32> = c
            .items()
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Circle(cc) => cc.stroke.width,
                _ => unreachable!(),
            })
            .collect();
        // Root at 3.0, the six depth-1 children at 2.7.
        assert_eq!(widths[0], 3.0);
        assert!(widths[1..].iter().all(|&w| (w - 2.7).abs() < 1e-6));

        // Far depths floor at 1.
        assert_eq!((3.0f32 - 9.0 * 0.3).max(1.0), 1.0);
    }

    // ── determinism ───────────────────────────────────────────────────────

    #[test]
    fn identical_inputs_yield_identical_streams() {
        let mut a = canvas();
        let mut b = canvas();
        render(&mut a, 1.234, Vec2::new(123.0, 45.0), 80.0, 0, 3, 0.5, 1.0);
        render(&mut b, 1.234, Vec2::new(123.0, 45.0), 80.0, 0, 3, 0.5, 1.0);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn direction_affects_grandchild_placement() {
        // With clock != 0, flipping the root direction changes the child
        // rotation term and therefore grandchild centers.
        let mut a = canvas();
        let mut b = canvas();
        render(&mut a, 2.0, Vec2::new(400.0, 300.0), 100.0, 0, 2, 0.0, 1.0);
        render(&mut b, 2.0, Vec2::new(400.0, 300.0), 100.0, 0, 2, 0.0, -1.0);
        assert_eq!(a.items().len(), b.items().len());
        assert_ne!(a.items(), b.items());
    }
}
