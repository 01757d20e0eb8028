//! Bounding-box analysis of a render target.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::SpriteCamError;

/// World-space geometry of a target as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetGeometry {
    /// Corners of the target's oriented bounding box, in world space.
    /// Normally eight, but any non-empty set is accepted.
    pub corners: Vec<Vec3>,
    /// Current world orientation of the target.
    pub orientation: Quat,
    /// Axis-aligned size of the target along its local axes.
    pub dimensions: Vec3,
}

impl TargetGeometry {
    /// Geometry of a box with the given center, orientation and size.
    #[must_use]
    pub fn from_oriented_box(
        center: Vec3,
        orientation: Quat,
        dimensions: Vec3,
    ) -> Self {
        let half = dimensions.abs() * 0.5;
        let corners = (0..8)
            .map(|i| {
                let sign = Vec3::new(
                    if i & 1 == 0 { -1.0 } else { 1.0 },
                    if i & 2 == 0 { -1.0 } else { 1.0 },
                    if i & 4 == 0 { -1.0 } else { 1.0 },
                );
                center + orientation * (half * sign)
            })
            .collect();
        Self {
            corners,
            orientation,
            dimensions,
        }
    }
}

/// Center, size and orientation of a target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Midpoint of the extreme corner coordinates on each axis.
    pub center: Vec3,
    /// Non-negative size along each local axis.
    pub extents: Vec3,
    /// Orientation copied from the target.
    pub orientation: Quat,
}

impl BoundingBox {
    /// Length of the extents vector (the box diagonal).
    #[must_use]
    pub fn extent_length(&self) -> f32 {
        self.extents.length()
    }
}

/// Derive a [`BoundingBox`] from target geometry.
///
/// The center is the midpoint of the per-axis extremes rather than the mean
/// of the corners, so duplicated or uneven corners do not pull it.
///
/// # Errors
///
/// [`SpriteCamError::InvalidGeometry`] when there are no corners or any
/// coordinate is not finite.
pub fn analyze(geometry: &TargetGeometry) -> Result<BoundingBox, SpriteCamError> {
    let Some(first) = geometry.corners.first() else {
        return Err(SpriteCamError::InvalidGeometry(
            "target has no bounding corners".to_owned(),
        ));
    };
    if !geometry.corners.iter().all(|c| c.is_finite()) {
        return Err(SpriteCamError::InvalidGeometry(
            "bounding corner is not finite".to_owned(),
        ));
    }
    if !geometry.dimensions.is_finite() {
        return Err(SpriteCamError::InvalidGeometry(
            "target dimensions are not finite".to_owned(),
        ));
    }

    let (min, max) = geometry
        .corners
        .iter()
        .fold((*first, *first), |(min, max), c| (min.min(*c), max.max(*c)));

    let orientation = if geometry.orientation.is_finite()
        && geometry.orientation.length_squared() > 0.0
    {
        geometry.orientation.normalize()
    } else {
        Quat::IDENTITY
    };

    Ok(BoundingBox {
        center: (max + min) * 0.5,
        extents: geometry.dimensions.abs(),
        orientation,
    })
}
