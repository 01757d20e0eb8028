use glam::{Mat4, Quat, Vec3};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Projection model of the render camera.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraType {
    /// Parallel projection sized by an ortho scale.
    #[default]
    Orthographic,
    /// Pinhole projection sized by a field of view.
    Perspective,
}

/// World transform of a camera. The camera looks down its local -Z with
/// local +Y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space.
    pub orientation: Quat,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Quat::IDENTITY,
        }
    }
}

impl CameraPose {
    /// Viewing direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation * Vec3::NEG_Z
    }

    /// Camera-space up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.orientation * Vec3::Y
    }

    /// Camera-to-world matrix.
    #[must_use]
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.orientation, self.position)
    }

    /// World-to-camera matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }
}

/// Size of the projected image, per camera type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lens {
    /// Field of view across the larger image side, in radians.
    Fov(f32),
    /// World-space width covered by the larger image side.
    OrthoScale(f32),
}

/// Camera-internal projection parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraIntrinsics {
    /// Projection model.
    pub camera_type: CameraType,
    /// Near clipping distance, always positive.
    pub clip_near: f32,
    /// Far clipping distance, never below `clip_near`.
    pub clip_far: f32,
    /// Field of view or ortho scale, matching `camera_type`.
    pub lens: Lens,
}

impl Default for CameraIntrinsics {
    fn default() -> Self {
        Self {
            camera_type: CameraType::Orthographic,
            clip_near: 0.1,
            clip_far: 100.0,
            lens: Lens::OrthoScale(6.0),
        }
    }
}

impl CameraIntrinsics {
    /// Projection matrix for an image with the given width / height ratio.
    /// Depth maps to [0, 1].
    #[must_use]
    pub fn projection(&self, aspect: f32) -> Mat4 {
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            1.0
        };
        match self.lens {
            Lens::Fov(fov) => {
                // The lens angle spans the larger side
                let fovy = if aspect >= 1.0 {
                    2.0 * ((fov * 0.5).tan() / aspect).atan()
                } else {
                    fov
                };
                Mat4::perspective_rh(fovy, aspect, self.clip_near, self.clip_far)
            }
            Lens::OrthoScale(scale) => {
                let (half_w, half_h) = if aspect >= 1.0 {
                    (scale * 0.5, scale * 0.5 / aspect)
                } else {
                    (scale * 0.5 * aspect, scale * 0.5)
                };
                Mat4::orthographic_rh(
                    -half_w,
                    half_w,
                    -half_h,
                    half_h,
                    self.clip_near,
                    self.clip_far,
                )
            }
        }
    }
}

/// Everything the host needs to place and configure a camera.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraState {
    /// Where the camera is and where it looks.
    pub pose: CameraPose,
    /// How it projects.
    pub intrinsics: CameraIntrinsics,
}

impl CameraState {
    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self, aspect: f32) -> Mat4 {
        self.intrinsics.projection(aspect) * self.pose.view_matrix()
    }
}
