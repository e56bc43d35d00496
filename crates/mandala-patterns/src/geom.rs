//! Geometry primitives shared by the generators.
//!
//! Pure functions; all inputs are finite reals by construction of callers.

use mandala_engine::coords::Vec2;

/// Point on the circle of `radius` around `center` at `angle` radians.
#[inline]
pub fn point_on_circle(center: Vec2, radius: f32, angle: f32) -> Vec2 {
    center + Vec2::from_angle(angle) * radius
}

/// Endpoint of a segment of `length` starting at `origin` toward `angle`.
///
/// Same formula as [`point_on_circle`]; the name reflects tree-branch use.
#[inline]
pub fn segment_endpoint(origin: Vec2, length: f32, angle: f32) -> Vec2 {
    origin + Vec2::from_angle(angle) * length
}

/// Arithmetic mean of two points, used for triangle subdivision.
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::{FRAC_PI_2, PI};

    fn close(a: Vec2, b: Vec2) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn point_on_circle_quadrants() {
        let c = Vec2::new(10.0, 20.0);
        assert!(close(point_on_circle(c, 5.0, 0.0), Vec2::new(15.0, 20.0)));
        assert!(close(point_on_circle(c, 5.0, FRAC_PI_2), Vec2::new(10.0, 25.0)));
        assert!(close(point_on_circle(c, 5.0, PI), Vec2::new(5.0, 20.0)));
    }

    #[test]
    fn segment_endpoint_matches_point_on_circle() {
        let o = Vec2::new(-3.0, 7.0);
        assert_eq!(segment_endpoint(o, 12.0, 1.25), point_on_circle(o, 12.0, 1.25));
    }

    #[test]
    fn midpoint_is_mean() {
        let m = midpoint(Vec2::new(0.0, 0.0), Vec2::new(10.0, -4.0));
        assert_eq!(m, Vec2::new(5.0, -2.0));
    }
}
