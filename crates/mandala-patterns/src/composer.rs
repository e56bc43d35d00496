//! Frame composer.
//!
//! Owns the animation clock and assembles one frame per invocation: a
//! centered full-opacity circle cluster plus three faded "floating" clusters
//! orbiting it, with the tree and triangle generators available as optional
//! extra layers.
//!
//! `advance` and `compose` are deliberately separate: composing with a frozen
//! clock is idempotent, which is what makes the output testable.

use core::f32::consts::{FRAC_PI_2, TAU};

use mandala_engine::coords::Vec2;
use mandala_engine::scene::Canvas;

use crate::{circles, sierpinski, tree};

/// Clock increment per composed frame.
///
/// The step is fixed per frame rather than scaled by elapsed time, so
/// animation speed follows the display refresh rate.
pub const CLOCK_STEP: f32 = 0.005;

const MAIN_MAX_DEPTH: u32 = 4;

const FLOATING_COUNT: u32 = 3;
const FLOATING_ALPHA: f32 = 0.3;
const FLOATING_MAX_DEPTH: u32 = 3;

const TREE_MAX_DEPTH: u32 = 8;
const TRIANGLE_MAX_DEPTH: u32 = 5;

/// Which pattern layers a frame includes.
///
/// The default matches the live composition: circles only. The tree and
/// triangle generators stay independently callable and can be layered in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Layers {
    pub circles: bool,
    pub tree: bool,
    pub triangle: bool,
}

impl Default for Layers {
    fn default() -> Self {
        Self {
            circles: true,
            tree: false,
            triangle: false,
        }
    }
}

/// Per-frame composition driver.
#[derive(Debug, Clone)]
pub struct Composer {
    clock: f32,
    layers: Layers,
}

impl Composer {
    pub fn new() -> Self {
        Self {
            clock: 0.0,
            layers: Layers::default(),
        }
    }

    pub fn with_layers(layers: Layers) -> Self {
        Self { clock: 0.0, layers }
    }

    #[inline]
    pub fn clock(&self) -> f32 {
        self.clock
    }

    /// Sets the clock to an arbitrary instant. Frames are a pure function of
    /// the clock and canvas size, so this is all a test needs to reproduce
    /// any frame.
    pub fn set_clock(&mut self, clock: f32) {
        self.clock = clock;
    }

    /// Advances the clock by one frame step.
    pub fn advance(&mut self) {
        self.clock += CLOCK_STEP;
    }

    /// Composes one frame into `canvas` at the current clock.
    pub fn compose(&self, canvas: &mut Canvas) {
        canvas.clear();

        let (width, height) = canvas.size();
        let center = Vec2::new(width * 0.5, height * 0.5);
        let base_radius = width.min(height) * 0.25;

        if self.layers.circles {
            self.compose_circles(canvas, center, base_radius, width, height);
        }
        if self.layers.tree {
            self.compose_tree(canvas, width, height);
        }
        if self.layers.triangle {
            self.compose_triangle(canvas, center, width, height);
        }
    }

    fn compose_circles(
        &self,
        canvas: &mut Canvas,
        center: Vec2,
        base_radius: f32,
        width: f32,
        height: f32,
    ) {
        // Main cluster, full opacity.
        circles::render(
            canvas,
            self.clock,
            center,
            base_radius,
            0,
            MAIN_MAX_DEPTH,
            self.clock,
            1.0,
        );

        // Floating clusters on a slow two-frequency orbit, faded and evenly
        // phase-shifted around the center.
        for i in 0..FLOATING_COUNT {
            let phase = i as f32 * TAU / FLOATING_COUNT as f32;
            let offset = Vec2::new(
                (self.clock + phase).sin() * width * 0.3,
                (self.clock * 0.7 + phase).cos() * height * 0.3,
            );

            canvas.push_state();
            canvas.set_global_alpha(FLOATING_ALPHA);
            circles::render(
                canvas,
                self.clock,
                center + offset,
                base_radius * 0.3,
                0,
                FLOATING_MAX_DEPTH,
                -self.clock + i as f32,
                1.0,
            );
            canvas.pop_state();
        }
    }

    fn compose_tree(&self, canvas: &mut Canvas, width: f32, height: f32) {
        let origin = Vec2::new(width * 0.5, height);
        let trunk = width.min(height) * 0.2;
        tree::render(canvas, self.clock, origin, trunk, -FRAC_PI_2, 0, TREE_MAX_DEPTH);
    }

    fn compose_triangle(&self, canvas: &mut Canvas, center: Vec2, width: f32, height: f32) {
        let side = width.min(height) * 0.8;
        let tri_height = side * 3.0f32.sqrt() * 0.5;

        let p1 = Vec2::new(center.x, center.y - tri_height * 0.5);
        let p2 = Vec2::new(center.x + side * 0.5, center.y + tri_height * 0.5);
        let p3 = Vec2::new(center.x - side * 0.5, center.y + tri_height * 0.5);

        sierpinski::render(canvas, p1, p2, p3, 0, TRIANGLE_MAX_DEPTH);
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mandala_engine::scene::DrawCmd;

    fn canvas() -> Canvas {
        Canvas::new(800.0, 600.0)
    }

    /// Node count of a full 6-ary tree of the given depth.
    fn cluster_size(max_depth: u32) -> usize {
        (6usize.pow(max_depth + 1) - 1) / 5
    }

    // ── clock ─────────────────────────────────────────────────────────────

    #[test]
    fn advance_steps_by_fixed_increment() {
        let mut composer = Composer::new();
        assert_eq!(composer.clock(), 0.0);
        composer.advance();
        assert!((composer.clock() - CLOCK_STEP).abs() < 1e-9);
        composer.advance();
        assert!((composer.clock() - 2.0 * CLOCK_STEP).abs() < 1e-9);
    }

    // ── default composition ───────────────────────────────────────────────

    #[test]
    fn default_frame_is_one_main_and_three_floating_clusters() {
        // 800x600: base radius 150 keeps the main cluster above the radius
        // cutoff through depth 4, the floating ones (45) through depth 3.
        let mut c = canvas();
        Composer::new().compose(&mut c);

        let expected = cluster_size(4) + 3 * cluster_size(3);
        assert_eq!(c.items().len(), expected);
        assert!(c.items().iter().all(|cmd| matches!(cmd, DrawCmd::Circle(_))));
    }

    #[test]
    fn frozen_clock_composes_identically() {
        let mut composer = Composer::new();
        composer.set_clock(7.25);

        let mut a = canvas();
        let mut b = canvas();
        composer.compose(&mut a);
        composer.compose(&mut b);
        assert_eq!(a.items(), b.items());
    }

    #[test]
    fn advancing_the_clock_changes_the_frame() {
        let mut composer = Composer::new();
        let mut a = canvas();
        composer.compose(&mut a);

        composer.advance();
        let mut b = canvas();
        composer.compose(&mut b);

        assert_eq!(a.items().len(), b.items().len());
        assert_ne!(a.items(), b.items());
    }

    // ── scoped alpha ──────────────────────────────────────────────────────

    #[test]
    fn floating_alpha_does_not_leak() {
        let mut c = canvas();
        Composer::new().compose(&mut c);

        // Ambient alpha is back to its pre-floating value after composition.
        assert_eq!(c.global_alpha(), 1.0);

        // The main cluster's root stroke carries the full palette alpha; the
        // floating roots carry it scaled by 0.3.
        let alpha_of = |cmd: &DrawCmd| match cmd {
            DrawCmd::Circle(cc) => cc.stroke.color.a,
            _ => unreachable!(),
        };
        let main_root = alpha_of(&c.items()[0]);
        assert!((main_root - 0.8).abs() < 1e-6);

        let first_floating_root = alpha_of(&c.items()[cluster_size(4)]);
        assert!((first_floating_root - 0.8 * FLOATING_ALPHA).abs() < 1e-6);
    }

    // ── optional layers ───────────────────────────────────────────────────

    #[test]
    fn tree_layer_adds_segments() {
        let composer = Composer::with_layers(Layers {
            circles: false,
            tree: true,
            triangle: false,
        });
        let mut c = canvas();
        composer.compose(&mut c);

        // Trunk 120 stays above the length cutoff through depth 8
        // (120 * 0.7^8 = 6.9): a full binary tree.
        assert_eq!(c.items().len(), 2usize.pow(9) - 1);
        assert!(c.items().iter().all(|cmd| matches!(cmd, DrawCmd::Segment(_))));
    }

    #[test]
    fn triangle_layer_adds_outlines() {
        let composer = Composer::with_layers(Layers {
            circles: false,
            tree: false,
            triangle: true,
        });
        let mut c = canvas();
        composer.compose(&mut c);

        assert_eq!(c.items().len(), (3usize.pow(6) - 1) / 2);
        assert!(c.items().iter().all(|cmd| matches!(cmd, DrawCmd::Triangle(_))));
    }

    #[test]
    fn layers_stack_back_to_front() {
        let composer = Composer::with_layers(Layers {
            circles: true,
            tree: true,
            triangle: true,
        });
        let mut c = canvas();
        composer.compose(&mut c);

        // Circles first, then tree segments, then triangle outlines.
        let first_segment = c
            .items()
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Segment(_)))
            .unwrap();
        let first_triangle = c
            .items()
            .iter()
            .position(|cmd| matches!(cmd, DrawCmd::Triangle(_)))
            .unwrap();
        assert!(first_segment > 0);
        assert!(first_triangle > first_segment);
    }

    // ── composition clears previous frames ────────────────────────────────

    #[test]
    fn compose_replaces_prior_contents() {
        let mut composer = Composer::new();
        let mut c = canvas();
        composer.compose(&mut c);
        let first_len = c.items().len();

        composer.advance();
        composer.compose(&mut c);
        assert_eq!(c.items().len(), first_len);
    }
}
