//! Yaw and heading utilities
//!
//! Orientation is a single yaw angle (degrees) around the world up axis. The
//! conversions go through `glam` quaternions so that a yaw of `a` maps the
//! zero-yaw heading `+Z` onto `(sin a, 0, cos a)`.

use crate::types::Vec3;
use glam::Quat;

/// Quaternion for a rotation of `yaw_deg` degrees around the up axis.
#[must_use]
pub fn yaw_rotation(yaw_deg: f32) -> Quat {
    Quat::from_rotation_y(yaw_deg.to_radians())
}

/// Rotate `v` by `yaw_deg` degrees around the up axis.
#[must_use]
pub fn rotate_about_up(v: Vec3, yaw_deg: f32) -> Vec3 {
    (yaw_rotation(yaw_deg) * glam::Vec3::from(v)).into()
}

/// Unit heading for a body with the given yaw.
#[must_use]
pub fn forward_from_yaw(yaw_deg: f32) -> Vec3 {
    rotate_about_up(Vec3::FORWARD, yaw_deg)
}

/// Yaw that points a body along `dir`, ignoring its vertical component.
///
/// Returns `None` when `dir` has no horizontal extent.
#[must_use]
pub fn yaw_towards(dir: Vec3) -> Option<f32> {
    if dir.x.abs() < 1e-6 && dir.z.abs() < 1e-6 {
        return None;
    }
    Some(dir.x.atan2(dir.z).to_degrees())
}

/// Wrap an angle into `[0, 360)`.
#[must_use]
pub fn wrap_degrees(deg: f32) -> f32 {
    deg.rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-5
    }

    #[test]
    fn zero_yaw_faces_forward() {
        assert!(close(forward_from_yaw(0.0), Vec3::FORWARD));
    }

    #[test]
    fn quarter_turn_faces_positive_x() {
        assert!(close(forward_from_yaw(90.0), Vec3::new(1.0, 0.0, 0.0)));
        assert!(close(forward_from_yaw(-90.0), Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn yaw_towards_inverts_forward() {
        for yaw in [-170.0_f32, -45.0, 0.0, 30.0, 135.0] {
            let back = yaw_towards(forward_from_yaw(yaw)).unwrap();
            assert!((wrap_degrees(back) - wrap_degrees(yaw)).abs() < 1e-3, "{yaw} -> {back}");
        }
        assert_eq!(yaw_towards(Vec3::UP), None);
    }
}
