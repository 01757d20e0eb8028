//! The orbit reference frame ("helper") the camera circles around.

use std::f32::consts::FRAC_PI_2;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;

/// Pivot location and basis of the camera's circular path.
///
/// The orbit axis is the frame's local +Z. With an identity orientation the
/// camera circles the global vertical axis no matter how the target is
/// tilted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitFrame {
    /// Pivot point in world space.
    pub location: Vec3,
    /// Reference orientation of the orbit basis.
    pub orientation: Quat,
    /// Display size of the helper gizmo. Never below 1.
    pub display_scale: f32,
}

impl Default for OrbitFrame {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            display_scale: 1.0,
        }
    }
}

/// Orientations of the two marker shapes that visualize a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HelperGizmo {
    /// Arrow along the orbit axis.
    pub arrow: Quat,
    /// Ring lying in the orbit plane.
    pub ring: Quat,
    /// Uniform scale for both markers.
    pub scale: f32,
}

impl OrbitFrame {
    /// Build the frame for a target's bounding box.
    ///
    /// `copy_local_orientation` keeps the box orientation; otherwise the frame
    /// is aligned to the global axes.
    #[must_use]
    pub fn build(bbox: &BoundingBox, copy_local_orientation: bool) -> Self {
        let orientation = if copy_local_orientation {
            bbox.orientation
        } else {
            Quat::IDENTITY
        };
        Self {
            location: bbox.center,
            orientation,
            display_scale: bbox.extent_length().max(1.0),
        }
    }

    /// The orbit axis in world space.
    #[must_use]
    pub fn axis(&self) -> Vec3 {
        self.orientation * Vec3::Z
    }

    /// Marker orientations for drawing the frame. The ring is the arrow
    /// turned a quarter about local X; it has no effect on pose solving.
    #[must_use]
    pub fn gizmo(&self) -> HelperGizmo {
        HelperGizmo {
            arrow: self.orientation,
            ring: self.orientation * Quat::from_rotation_x(FRAC_PI_2),
            scale: self.display_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tilted_box(extents: Vec3) -> BoundingBox {
        BoundingBox {
            center: Vec3::new(1.0, 2.0, 3.0),
            extents,
            orientation: Quat::from_rotation_x(0.5),
        }
    }

    #[test]
    fn identity_frame_ignores_target_tilt() {
        let frame = OrbitFrame::build(&tilted_box(Vec3::splat(2.0)), false);
        assert_eq!(frame.orientation, Quat::IDENTITY);
        assert_eq!(frame.axis(), Vec3::Z);
        assert_eq!(frame.location, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn local_frame_copies_orientation() {
        let bbox = tilted_box(Vec3::splat(2.0));
        let frame = OrbitFrame::build(&bbox, true);
        assert_eq!(frame.orientation, bbox.orientation);
        assert!((frame.axis() - bbox.orientation * Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn small_targets_get_unit_helper() {
        let frame = OrbitFrame::build(&tilted_box(Vec3::splat(0.1)), false);
        assert_eq!(frame.display_scale, 1.0);

        let frame = OrbitFrame::build(&tilted_box(Vec3::new(3.0, 4.0, 0.0)), false);
        assert!((frame.display_scale - 5.0).abs() < 1e-6);
    }

    #[test]
    fn ring_lies_in_orbit_plane() {
        let frame = OrbitFrame::default();
        let gizmo = frame.gizmo();
        // Ring normal (its local Z) is perpendicular to the orbit axis
        let ring_normal = gizmo.ring * Vec3::Z;
        assert!(ring_normal.dot(frame.axis()).abs() < 1e-6);
        assert_eq!(gizmo.arrow, frame.orientation);
    }
}
