//! Axis-angle rotation (Rodrigues' formula).

use glam::DVec3;

/// Rotate `point` about `axis` by `theta` radians.
///
/// `p' = p·cosθ + (axis×p)·sinθ + axis·(axis·p)·(1−cosθ)`
///
/// `axis` must be unit length. This is not checked; a non-unit axis gives a
/// scaled, skewed result rather than a panic, so callers normalize first.
#[inline]
pub fn rotate_point(axis: DVec3, theta: f64, point: DVec3) -> DVec3 {
    let (sin, cos) = theta.sin_cos();
    point * cos + axis.cross(point) * sin + axis * axis.dot(point) * (1.0 - cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx(a: DVec3, b: DVec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_quarter_turn_about_y() {
        // Right-handed: +90° about +Y takes -Z to -X.
        let rotated = rotate_point(DVec3::Y, FRAC_PI_2, DVec3::NEG_Z);
        assert!(approx(rotated, DVec3::NEG_X));
    }

    #[test]
    fn test_point_on_axis_is_fixed() {
        let axis = DVec3::new(1.0, 1.0, 0.0).normalize();
        let point = axis * 3.0;
        assert!(approx(rotate_point(axis, 1.234, point), point));
    }

    #[test]
    fn test_preserves_length() {
        let axis = DVec3::new(0.3, -0.5, 0.8).normalize();
        let point = DVec3::new(2.0, 1.0, -4.0);
        let rotated = rotate_point(axis, 0.7, point);
        assert!((rotated.length() - point.length()).abs() < 1e-9);
    }

    #[test]
    fn test_inverse_angle_round_trip() {
        let axis = DVec3::new(-0.2, 0.9, 0.1).normalize();
        let point = DVec3::new(0.0, 0.0, -1.0);
        let there = rotate_point(axis, 0.4, point);
        let back = rotate_point(axis, -0.4, there);
        assert!(approx(back, point));
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let point = DVec3::new(1.5, -2.0, 0.25);
        assert!(approx(rotate_point(DVec3::X, 0.0, point), point));
    }
}
