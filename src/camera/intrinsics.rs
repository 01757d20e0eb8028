//! Clip planes and lens size from target size and camera distance.

use super::core::{CameraIntrinsics, CameraType, Lens};

/// Smallest clip distance handed to a projection.
pub const MIN_CLIP: f32 = 1.0e-3;
/// Narrowest perspective field of view (radians).
pub const FOV_MIN: f32 = 0.006_405_36;
/// Widest perspective field of view (radians).
pub const FOV_MAX: f32 = 3.016_75;
/// Smallest orthographic scale.
pub const MIN_ORTHO_SCALE: f32 = 1.0e-3;
/// Clip range margin, as a multiple of the target extent length.
pub const CLIP_MARGIN: f32 = 1.5;

/// Compute intrinsics for a camera `distance` away from a target whose
/// extents have length `target_extent_length`.
///
/// The clip range covers the target's bounding sphere with a 1.5x margin at
/// any orbit angle. Out-of-range lens values are clamped, never rejected.
#[must_use]
pub fn solve(
    camera_type: CameraType,
    target_extent_length: f32,
    distance: f32,
    fov: f32,
    ortho_scale: f32,
) -> CameraIntrinsics {
    let margin = CLIP_MARGIN * sanitize(target_extent_length).abs();
    let distance = sanitize(distance);
    let clip_near = (distance - margin).max(MIN_CLIP);
    let clip_far = (distance + margin).max(MIN_CLIP);

    let lens = match camera_type {
        CameraType::Orthographic => Lens::OrthoScale(clamp_ortho_scale(ortho_scale)),
        CameraType::Perspective => Lens::Fov(clamp_fov(fov)),
    };

    CameraIntrinsics {
        camera_type,
        clip_near,
        clip_far,
        lens,
    }
}

/// Clamp a field of view into the range a lens can physically produce.
#[must_use]
pub fn clamp_fov(fov: f32) -> f32 {
    let clamped = sanitize(fov).clamp(FOV_MIN, FOV_MAX);
    if clamped != fov {
        log::debug!("field of view {fov} clamped to {clamped}");
    }
    clamped
}

/// Clamp an orthographic scale to a positive size.
#[must_use]
pub fn clamp_ortho_scale(scale: f32) -> f32 {
    let clamped = sanitize(scale).max(MIN_ORTHO_SCALE);
    if clamped != scale {
        log::debug!("ortho scale {scale} clamped to {clamped}");
    }
    clamped
}

fn sanitize(value: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_planes_are_ordered_and_positive() {
        let distances = [0.0, 0.5, 1.0, 7.5, 20.0, 500.0];
        let extents = [0.0, 0.1, 1.0, 3.3, 50.0];
        for &d in &distances {
            for &l in &extents {
                let i = solve(CameraType::Orthographic, l, d, 0.8, 6.0);
                assert!(i.clip_near > 0.0, "near {} for d={d} l={l}", i.clip_near);
                assert!(i.clip_far > 0.0);
                assert!(i.clip_near <= i.clip_far);
            }
        }
    }

    #[test]
    fn clip_range_brackets_target() {
        let i = solve(CameraType::Perspective, 4.0, 20.0, 0.7, 1.0);
        assert_eq!(i.clip_near, 14.0);
        assert_eq!(i.clip_far, 26.0);
    }

    #[test]
    fn near_clip_floors_at_epsilon() {
        let i = solve(CameraType::Perspective, 10.0, 2.0, 0.7, 1.0);
        assert_eq!(i.clip_near, MIN_CLIP);
        assert_eq!(i.clip_far, 17.0);
    }

    #[test]
    fn orthographic_uses_scale_directly() {
        let i = solve(CameraType::Orthographic, 1.0, 10.0, 0.7, 7.25);
        assert_eq!(i.lens, Lens::OrthoScale(7.25));
        assert_eq!(i.camera_type, CameraType::Orthographic);
    }

    #[test]
    fn perspective_fov_is_clamped() {
        let wide = solve(CameraType::Perspective, 1.0, 10.0, 4.0, 1.0);
        assert_eq!(wide.lens, Lens::Fov(FOV_MAX));
        let narrow = solve(CameraType::Perspective, 1.0, 10.0, 0.0, 1.0);
        assert_eq!(narrow.lens, Lens::Fov(FOV_MIN));
        let normal = solve(CameraType::Perspective, 1.0, 10.0, 0.9, 1.0);
        assert_eq!(normal.lens, Lens::Fov(0.9));
    }

    #[test]
    fn degenerate_inputs_still_project() {
        let i = solve(CameraType::Orthographic, f32::NAN, f32::INFINITY, 0.0, -3.0);
        assert!(i.clip_near > 0.0 && i.clip_near <= i.clip_far);
        assert_eq!(i.lens, Lens::OrthoScale(MIN_ORTHO_SCALE));
    }
}
