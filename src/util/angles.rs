//! Euler-angle orientation and angle normalization helpers.
//!
//! Orientations are carried as [`Quat`] everywhere inside the crate.
//! [`EulerXyz`] is the three-angle view of the same rotation, used where
//! parameters arrive as separate pitch/yaw/roll values.

use std::f32::consts::{PI, TAU};

use glam::{EulerRot, Quat};
use serde::{Deserialize, Serialize};

/// Rotation as three angles in radians, applied extrinsically about the
/// world X axis, then Y, then Z (matrix `Rz * Ry * Rx`).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerXyz {
    /// Rotation about X (radians).
    pub x: f32,
    /// Rotation about Y (radians).
    pub y: f32,
    /// Rotation about Z (radians).
    pub z: f32,
}

impl EulerXyz {
    /// Angles with the given X, Y, Z components.
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Equivalent quaternion.
    #[must_use]
    pub fn to_quat(self) -> Quat {
        Quat::from_rotation_z(self.z)
            * Quat::from_rotation_y(self.y)
            * Quat::from_rotation_x(self.x)
    }

    /// Decompose a quaternion into X/Y/Z angles. Inverse of
    /// [`to_quat`](Self::to_quat) away from the Y = ±π/2 singularity.
    #[must_use]
    pub fn from_quat(q: Quat) -> Self {
        let (z, y, x) = q.normalize().to_euler(EulerRot::ZYX);
        Self { x, y, z }
    }
}

impl From<EulerXyz> for Quat {
    fn from(e: EulerXyz) -> Self {
        e.to_quat()
    }
}

/// Normalize an angle into (-π, π].
///
/// Only call this where a value enters the system (options, CLI). Angles
/// flowing between solvers are left as-is.
#[must_use]
pub fn wrap_angle(angle: f32) -> f32 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use glam::Vec3;

    use super::*;

    fn quat_close(a: Quat, b: Quat) -> bool {
        // q and -q describe the same rotation
        a.dot(b).abs() > 1.0 - 1e-5
    }

    #[test]
    fn euler_applies_x_then_y_then_z() {
        // X first: +Y goes to +Z, then Z quarter turn leaves +Z alone
        let q = EulerXyz::new(FRAC_PI_2, 0.0, FRAC_PI_2).to_quat();
        let v = q * Vec3::Y;
        assert!((v - Vec3::Z).length() < 1e-5, "got {v}");

        // +X is untouched by X, then Z quarter turn sends it to +Y
        let v = q * Vec3::X;
        assert!((v - Vec3::Y).length() < 1e-5, "got {v}");
    }

    #[test]
    fn euler_quat_interconvert() {
        let angles = EulerXyz::new(0.3, -0.7, 2.1);
        let back = EulerXyz::from_quat(angles.to_quat());
        assert!((back.x - angles.x).abs() < 1e-4);
        assert!((back.y - angles.y).abs() < 1e-4);
        assert!((back.z - angles.z).abs() < 1e-4);
        assert!(quat_close(back.to_quat(), Quat::from(angles)));
    }

    #[test]
    fn wrap_angle_lands_in_half_open_range() {
        assert!((wrap_angle(3.0 * PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(-PI) - PI).abs() < 1e-5);
        assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
        assert!((wrap_angle(-0.25) + 0.25).abs() < 1e-6);
        for i in -20..20 {
            let a = wrap_angle(i as f32 * 0.9);
            assert!(a > -PI && a <= PI, "{a} out of range");
        }
    }

    #[test]
    fn wrap_angle_rejects_non_finite() {
        assert_eq!(wrap_angle(f32::NAN), 0.0);
        assert_eq!(wrap_angle(f32::INFINITY), 0.0);
    }
}
