//! Depth-indexed stroke palette.
//!
//! A fixed cycle of four translucent-white levels; depth selects a level
//! modulo the palette size, so deep recursion fades and re-brightens.

use mandala_engine::paint::Color;

/// Straight-alpha levels, brightest first.
pub const ALPHA_LEVELS: [f32; 4] = [0.8, 0.6, 0.4, 0.2];

/// Stroke color for a recursion depth.
#[inline]
pub fn depth_color(depth: u32) -> Color {
    Color::white(ALPHA_LEVELS[depth as usize % ALPHA_LEVELS.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_cycles_every_four_levels() {
        assert_eq!(depth_color(0), depth_color(4));
        assert_eq!(depth_color(1), depth_color(5));
        assert_ne!(depth_color(0), depth_color(1));
    }

    #[test]
    fn depth_zero_is_brightest() {
        let c = depth_color(0);
        assert!((c.a - 0.8).abs() < 1e-6);
    }
}
