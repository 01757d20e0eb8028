//! Closed-form camera placement around an orbit frame.
//!
//! The pose is a pure function of the frame and the five scalar inputs, so
//! it can be recomputed for any orbit step at any time without carrying
//! state from previous steps.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};

use super::core::CameraPose;
use crate::scene::OrbitFrame;
use crate::util::angles::EulerXyz;

/// Distances below this leave the camera on the pivot.
pub const DISTANCE_EPSILON: f32 = 1.0e-6;

/// Place a camera on the sphere of radius `distance` around `frame`.
///
/// `pitch` raises the camera above the frame's XY plane, `yaw` turns it
/// about the frame's Z axis, `roll` twists it about its own viewing axis.
/// With all three at zero the camera sits on the frame's +X side of the
/// horizon looking back at the pivot.
///
/// The quarter-turn offsets (`π/2 - pitch`, `π/2 + yaw`) are part of the
/// contract: they map the zero angles onto the helper's forward axis.
#[must_use]
pub fn solve(
    frame: &OrbitFrame,
    pitch: f32,
    yaw: f32,
    roll: f32,
    distance: f32,
) -> CameraPose {
    let local = EulerXyz::new(FRAC_PI_2 - pitch, 0.0, FRAC_PI_2 + yaw);
    let rotation = frame.orientation * local.to_quat();

    // The camera's local +Z points away from what it looks at, so moving
    // along it backs the camera out from the pivot.
    let up = rotation * Vec3::Z;

    let position = if distance.abs() < DISTANCE_EPSILON {
        frame.location
    } else {
        // World-space offset from the pivot; no inverse world matrix is
        // involved, so repeated solves cannot drift.
        frame.location + up * distance
    };

    CameraPose {
        position,
        orientation: rotation * Quat::from_rotation_z(roll),
    }
}
