/// Linear premultiplied RGBA color.
///
/// Invariant:
/// - `rgb` components are expected to be multiplied by `a` (premultiplied alpha).
///
/// Rationale:
/// - correct blending with linear filtering (avoids fringes)
/// - matches the premultiplied blend state used by the shape renderers
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32, // premultiplied
    pub g: f32, // premultiplied
    pub b: f32, // premultiplied
    pub a: f32,
}

impl Color {
    #[inline]
    pub const fn transparent() -> Self {
        Self { r: 0.0, g: 0.0, b: 0.0, a: 0.0 }
    }

    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Self = Self { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    /// Creates a premultiplied color from premultiplied components.
    #[inline]
    pub const fn from_premul(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a premultiplied color from straight alpha components in `[0, 1]`.
    #[inline]
    pub fn from_straight(r: f32, g: f32, b: f32, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        Self {
            r: r.clamp(0.0, 1.0) * a,
            g: g.clamp(0.0, 1.0) * a,
            b: b.clamp(0.0, 1.0) * a,
            a,
        }
    }

    /// Translucent white at the given straight alpha.
    #[inline]
    pub fn white(alpha: f32) -> Self {
        Self::from_straight(1.0, 1.0, 1.0, alpha)
    }

    /// Applies an opacity multiplier.
    ///
    /// Premultiplied colors scale uniformly, so a global-alpha override is a
    /// single multiply across all four channels.
    #[inline]
    pub fn scaled_alpha(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        Self {
            r: self.r * alpha,
            g: self.g * alpha,
            b: self.b * alpha,
            a: self.a * alpha,
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_straight_premultiplies() {
        let c = Color::from_straight(1.0, 0.5, 0.0, 0.5);
        assert_eq!(c.r, 0.5);
        assert_eq!(c.g, 0.25);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 0.5);
    }

    #[test]
    fn from_straight_clamps_inputs() {
        let c = Color::from_straight(2.0, -1.0, 0.5, 1.5);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn scaled_alpha_scales_all_channels() {
        let c = Color::white(0.8).scaled_alpha(0.5);
        assert!((c.r - 0.4).abs() < 1e-6);
        assert!((c.a - 0.4).abs() < 1e-6);
    }

    #[test]
    fn scaled_alpha_full_opacity_is_identity() {
        let c = Color::white(0.6);
        assert_eq!(c.scaled_alpha(1.0), c);
    }
}
