use crate::coords::Vec2;
use crate::paint::Color;

use super::{DrawCmd, DrawList, Stroke};

/// Mutable canvas state consumed by subsequent stroke calls.
#[derive(Debug, Copy, Clone, PartialEq)]
struct CanvasState {
    stroke: Color,
    line_width: f32,
    global_alpha: f32,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            stroke: Color::WHITE,
            line_width: 1.0,
            global_alpha: 1.0,
        }
    }
}

/// Stateful recording surface.
///
/// `Canvas` is the drawing surface the pattern generators target: it holds
/// the current stroke style, line width, and a global-alpha multiplier with a
/// save/restore stack, and records each stroke as a [`DrawCmd`] in a
/// [`DrawList`]. Recorded colors are premultiplied by the active global alpha
/// at record time, so scoped opacity overrides cannot leak into later strokes.
///
/// The recorded stream is deterministic: identical call sequences produce
/// equal command sequences, which is what the pattern tests compare.
#[derive(Debug)]
pub struct Canvas {
    list: DrawList,
    state: CanvasState,
    saved: Vec<CanvasState>,
    width: f32,
    height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            list: DrawList::new(),
            state: CanvasState::default(),
            saved: Vec::new(),
            width,
            height,
        }
    }

    // ── dimensions ────────────────────────────────────────────────────────

    /// Updates the logical surface size (driven by window resize).
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    /// Wipes recorded commands and resets canvas state and the save stack.
    pub fn clear(&mut self) {
        self.list.clear();
        self.state = CanvasState::default();
        self.saved.clear();
    }

    /// Recorded commands in paint order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        self.list.items()
    }

    #[inline]
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    // ── state ─────────────────────────────────────────────────────────────

    pub fn set_stroke(&mut self, color: Color) {
        self.state.stroke = color;
    }

    /// Sets the line width in logical pixels. Non-positive widths are clamped
    /// to a hairline.
    pub fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width.max(0.1);
    }

    /// Sets the global opacity multiplier applied to subsequent strokes.
    pub fn set_global_alpha(&mut self, alpha: f32) {
        self.state.global_alpha = alpha.clamp(0.0, 1.0);
    }

    #[inline]
    pub fn global_alpha(&self) -> f32 {
        self.state.global_alpha
    }

    /// Saves the current canvas state onto the stack.
    pub fn push_state(&mut self) {
        self.saved.push(self.state);
    }

    /// Restores the most recently saved state.
    ///
    /// Unbalanced pops are a caller bug; debug builds assert, release builds
    /// leave the current state untouched.
    pub fn pop_state(&mut self) {
        debug_assert!(!self.saved.is_empty(), "pop_state without matching push_state");
        if let Some(state) = self.saved.pop() {
            self.state = state;
        }
    }

    // ── strokes ───────────────────────────────────────────────────────────

    fn current_stroke(&self) -> Stroke {
        Stroke::new(
            self.state.line_width,
            self.state.stroke.scaled_alpha(self.state.global_alpha),
        )
    }

    /// Strokes a circle outline at `center` with `radius`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        let stroke = self.current_stroke();
        self.list.push_circle(center, radius, stroke);
    }

    /// Strokes a line segment from `a` to `b`.
    pub fn stroke_segment(&mut self, a: Vec2, b: Vec2) {
        let stroke = self.current_stroke();
        self.list.push_segment(a, b, stroke);
    }

    /// Strokes a closed triangle outline.
    pub fn stroke_triangle(&mut self, p1: Vec2, p2: Vec2, p3: Vec2) {
        let stroke = self.current_stroke();
        self.list.push_triangle(p1, p2, p3, stroke);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stroke_of(cmd: &DrawCmd) -> Stroke {
        match cmd {
            DrawCmd::Circle(c) => c.stroke,
            DrawCmd::Segment(s) => s.stroke,
            DrawCmd::Triangle(t) => t.stroke,
        }
    }

    #[test]
    fn records_current_style() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.set_stroke(Color::white(0.8));
        canvas.set_line_width(3.0);
        canvas.stroke_circle(Vec2::new(50.0, 50.0), 10.0);

        let items = canvas.items();
        assert_eq!(items.len(), 1);
        let stroke = stroke_of(&items[0]);
        assert_eq!(stroke.width, 3.0);
        assert_eq!(stroke.color, Color::white(0.8));
    }

    #[test]
    fn global_alpha_scales_recorded_color() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.set_stroke(Color::white(1.0));
        canvas.set_global_alpha(0.3);
        canvas.stroke_segment(Vec2::zero(), Vec2::new(10.0, 0.0));

        let stroke = stroke_of(&canvas.items()[0]);
        assert!((stroke.color.a - 0.3).abs() < 1e-6);
        assert!((stroke.color.r - 0.3).abs() < 1e-6);
    }

    #[test]
    fn push_pop_restores_alpha() {
        let mut canvas = Canvas::new(100.0, 100.0);
        canvas.set_global_alpha(0.9);

        canvas.push_state();
        canvas.set_global_alpha(0.3);
        canvas.stroke_circle(Vec2::zero(), 5.0);
        canvas.pop_state();

        assert_eq!(canvas.global_alpha(), 0.9);

        // The next stroke uses the restored alpha.
        canvas.set_stroke(Color::white(1.0));
        canvas.stroke_circle(Vec2::zero(), 5.0);
        let stroke = stroke_of(&canvas.items()[1]);
        assert!((stroke.color.a - 0.9).abs() < 1e-6);
    }

    #[test]
    fn nested_push_pop() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.set_line_width(2.0);
        canvas.push_state();
        canvas.set_line_width(4.0);
        canvas.push_state();
        canvas.set_line_width(8.0);
        canvas.pop_state();
        assert_eq!(canvas.current_stroke().width, 4.0);
        canvas.pop_state();
        assert_eq!(canvas.current_stroke().width, 2.0);
    }

    #[test]
    fn clear_resets_state_and_stack() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.set_global_alpha(0.5);
        canvas.push_state();
        canvas.stroke_circle(Vec2::zero(), 1.0);

        canvas.clear();
        assert!(canvas.items().is_empty());
        assert_eq!(canvas.global_alpha(), 1.0);
        // The stack is empty again; a pop here would be unbalanced.
        assert!(canvas.saved.is_empty());
    }

    #[test]
    fn set_size_updates_dimensions() {
        let mut canvas = Canvas::new(100.0, 50.0);
        assert_eq!(canvas.size(), (100.0, 50.0));
        canvas.set_size(200.0, 150.0);
        assert_eq!(canvas.width(), 200.0);
        assert_eq!(canvas.height(), 150.0);
    }
}
