use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraType;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera placement and lens parameters. Angles are in degrees here and
/// converted to radians when a session is built.
#[allow(clippy::struct_excessive_bools)]
pub struct CameraOptions {
    /// Reuse a camera already in the scene instead of spawning one.
    #[schemars(title = "Use Existing Camera")]
    pub use_existing_camera: bool,
    /// Projection model.
    #[schemars(title = "Camera Type")]
    pub camera_type: CameraType,
    /// Camera elevation above the target's horizontal plane.
    #[schemars(title = "Camera Inclination", range(min = -360.0, max = 360.0), extend("step" = 0.01))]
    pub inclination_deg: f32,
    /// Azimuth offset relative to the target's forward axis.
    #[schemars(title = "Offset Angle", range(min = -360.0, max = 360.0), extend("step" = 0.01))]
    pub azimuth_offset_deg: f32,
    /// Twist of the camera about its viewing axis.
    #[schemars(title = "Roll", range(min = -180.0, max = 180.0), extend("step" = 0.01))]
    pub roll_deg: f32,
    /// Initial azimuth of the orbit.
    #[schemars(title = "Pivot Angle", range(min = -180.0, max = 180.0), extend("step" = 0.01))]
    pub pivot_angle_deg: f32,
    /// Camera distance from the pivot.
    #[schemars(title = "Offset Distance", range(min = 0.0, max = 1000.0), extend("step" = 0.1))]
    pub distance: f32,
    /// Derive the distance from the target's bounding box.
    #[schemars(title = "Auto Offset")]
    pub auto_distance: bool,
    /// Derive the lens size from the target's bounding box.
    #[schemars(title = "Auto Camera Scale")]
    pub auto_scale: bool,
    /// Perspective field of view.
    #[schemars(title = "Field of View", range(min = 0.367, max = 172.847), extend("step" = 0.1))]
    pub fov_deg: f32,
    /// Orthographic scale.
    #[schemars(title = "Ortho Scale", range(min = 0.001), extend("step" = 0.1))]
    pub ortho_scale: f32,
    /// Orbit around the target's local axes instead of the world's.
    #[schemars(title = "Copy Local Orientation")]
    pub copy_local_orientation: bool,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            use_existing_camera: false,
            camera_type: CameraType::Orthographic,
            inclination_deg: 57.3,
            azimuth_offset_deg: 0.0,
            roll_deg: 0.0,
            pivot_angle_deg: 45.0,
            distance: 20.0,
            auto_distance: false,
            auto_scale: false,
            fov_deg: 39.6,
            ortho_scale: 6.0,
            copy_local_orientation: false,
        }
    }
}
