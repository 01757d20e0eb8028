//! The orbit session: one target, one camera, one set of parameters.
//!
//! Every setter finishes by calling [`OrbitSession::recompute`], so the
//! camera state is always consistent with the parameters and there is no
//! chain of change callbacks to reason about.

use glam::Vec3;

use super::stepper::OrbitStepper;
use crate::camera::intrinsics::{self, clamp_fov, MIN_ORTHO_SCALE};
use crate::camera::{pose, CameraState, CameraType};
use crate::error::SpriteCamError;
use crate::options::Options;
use crate::scene::{analyze, BoundingBox, EntityId, OrbitFrame, SceneHost, TargetGeometry};
use crate::util::angles::wrap_angle;

/// Auto distance as a multiple of the target extent length.
pub const AUTO_DISTANCE_FACTOR: f32 = 2.0;
/// Padding applied when auto-fitting the lens to the target.
pub const AUTO_FIT_PADDING: f32 = 1.1;

/// Runtime orbit parameters. Angles are radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitParams {
    /// Elevation above the frame's horizontal plane.
    pub pitch: f32,
    /// Azimuth offset relative to the frame's forward axis.
    pub yaw: f32,
    /// Twist about the viewing axis.
    pub roll: f32,
    /// Initial azimuth of the orbit, added to `yaw`.
    pub pivot_angle: f32,
    /// Distance from the pivot when `auto_distance` is off.
    pub distance: f32,
    /// Derive the distance from the target size.
    pub auto_distance: bool,
    /// Derive the lens from the target size.
    pub auto_scale: bool,
    /// Projection model.
    pub camera_type: CameraType,
    /// Perspective field of view.
    pub fov: f32,
    /// Orthographic scale.
    pub ortho_scale: f32,
    /// Align the orbit to the target's local axes instead of the world's.
    pub copy_local_orientation: bool,
    /// Orbit steps per revolution.
    pub step_count: u32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self::from_options(&Options::default())
    }
}

impl OrbitParams {
    /// Convert user-facing options (degrees) into runtime parameters.
    /// This is where angles are normalized into (-π, π].
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        let camera = &options.camera;
        Self {
            pitch: wrap_angle(camera.inclination_deg.to_radians()),
            yaw: wrap_angle(camera.azimuth_offset_deg.to_radians()),
            roll: wrap_angle(camera.roll_deg.to_radians()),
            pivot_angle: wrap_angle(camera.pivot_angle_deg.to_radians()),
            distance: camera.distance,
            auto_distance: camera.auto_distance,
            auto_scale: camera.auto_scale,
            camera_type: camera.camera_type,
            fov: camera.fov_deg.to_radians(),
            ortho_scale: camera.ortho_scale,
            copy_local_orientation: camera.copy_local_orientation,
            step_count: options.render.increments,
        }
    }
}

/// Owns the orbit state for one target and keeps the camera in sync.
#[derive(Debug, Clone)]
pub struct OrbitSession {
    params: OrbitParams,
    stepper: OrbitStepper,
    bounds: Option<BoundingBox>,
    frame: OrbitFrame,
    camera: CameraState,
}

impl OrbitSession {
    /// Session with no target, orbiting the world origin.
    #[must_use]
    pub fn new(params: OrbitParams) -> Self {
        let mut session = Self {
            params,
            stepper: OrbitStepper::new(i64::from(params.step_count)),
            bounds: None,
            frame: OrbitFrame::default(),
            camera: CameraState::default(),
        };
        session.params.step_count = session.stepper.step_count();
        session.recompute();
        session
    }

    /// Current parameters.
    #[must_use]
    pub fn params(&self) -> &OrbitParams {
        &self.params
    }

    /// Current orbit index state.
    #[must_use]
    pub fn stepper(&self) -> &OrbitStepper {
        &self.stepper
    }

    /// Bounds of the current target, if any.
    #[must_use]
    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// The orbit frame in use.
    #[must_use]
    pub fn frame(&self) -> &OrbitFrame {
        &self.frame
    }

    /// Camera state for the current step.
    #[must_use]
    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    /// Replace the target. `None` falls back to the world-origin frame.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::InvalidGeometry`] if the geometry cannot be
    /// analyzed; the previous target stays in place.
    pub fn retarget(
        &mut self,
        geometry: Option<&TargetGeometry>,
    ) -> Result<(), SpriteCamError> {
        match geometry {
            Some(geometry) => {
                let bounds = analyze(geometry)?;
                self.frame =
                    OrbitFrame::build(&bounds, self.params.copy_local_orientation);
                self.bounds = Some(bounds);
            }
            None => {
                self.bounds = None;
                self.frame = OrbitFrame::default();
            }
        }
        self.recompute();
        Ok(())
    }

    /// Fetch a target from the host and [`retarget`](Self::retarget) to it.
    /// An unknown or absent handle resets to the world-origin frame.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::InvalidGeometry`] from the analysis.
    pub fn retarget_from_host<H: SceneHost + ?Sized>(
        &mut self,
        host: &H,
        target: Option<EntityId>,
    ) -> Result<(), SpriteCamError> {
        let geometry = target.and_then(|id| {
            let geometry = host.target_geometry(id);
            if geometry.is_none() {
                log::warn!("target {id} not found, orbiting world origin");
            }
            geometry
        });
        self.retarget(geometry.as_ref())
    }

    /// Set the elevation angle.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.params.pitch = pitch;
        self.recompute();
    }

    /// Set the azimuth offset.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.params.yaw = yaw;
        self.recompute();
    }

    /// Set the twist about the viewing axis.
    pub fn set_roll(&mut self, roll: f32) {
        self.params.roll = roll;
        self.recompute();
    }

    /// Set the initial orbit azimuth.
    pub fn set_pivot_angle(&mut self, angle: f32) {
        self.params.pivot_angle = angle;
        self.recompute();
    }

    /// Set the manual camera distance.
    pub fn set_distance(&mut self, distance: f32) {
        self.params.distance = distance;
        self.recompute();
    }

    /// Toggle deriving the distance from the target.
    pub fn set_auto_distance(&mut self, enabled: bool) {
        self.params.auto_distance = enabled;
        self.recompute();
    }

    /// Toggle deriving the lens from the target.
    pub fn set_auto_scale(&mut self, enabled: bool) {
        self.params.auto_scale = enabled;
        self.recompute();
    }

    /// Switch between orthographic and perspective.
    pub fn set_camera_type(&mut self, camera_type: CameraType) {
        self.params.camera_type = camera_type;
        self.recompute();
    }

    /// Set the perspective field of view.
    pub fn set_fov(&mut self, fov: f32) {
        self.params.fov = fov;
        self.recompute();
    }

    /// Set the orthographic scale.
    pub fn set_ortho_scale(&mut self, scale: f32) {
        self.params.ortho_scale = scale;
        self.recompute();
    }

    /// Choose between a target-aligned and a world-aligned orbit frame.
    pub fn set_copy_local_orientation(&mut self, enabled: bool) {
        self.params.copy_local_orientation = enabled;
        if let Some(bounds) = &self.bounds {
            self.frame = OrbitFrame::build(bounds, enabled);
        }
        self.recompute();
    }

    /// Change the number of orbit steps, clamped to [1, 99].
    pub fn set_step_count(&mut self, n: i64) {
        if self.stepper.set_step_count(n) {
            self.params.step_count = self.stepper.step_count();
            self.recompute();
        }
    }

    /// Jump to orbit step `i`, wrapped into range.
    pub fn set_index(&mut self, i: i64) {
        if self.stepper.set_index(i) {
            self.recompute();
        }
    }

    /// Move `delta` orbit steps.
    pub fn advance(&mut self, delta: i64) {
        if self.stepper.advance(delta) {
            self.recompute();
        }
    }

    /// Extent length of the current target, 0 without one.
    #[must_use]
    pub fn target_extent_length(&self) -> f32 {
        self.bounds.map_or(0.0, |b| b.extent_length())
    }

    /// Camera distance actually used, after auto distance.
    #[must_use]
    pub fn effective_distance(&self) -> f32 {
        if self.params.auto_distance {
            self.target_extent_length().max(1.0) * AUTO_DISTANCE_FACTOR
        } else {
            self.params.distance
        }
    }

    /// Camera state for any orbit step, without changing the session.
    #[must_use]
    pub fn camera_for_step(&self, step: u32) -> CameraState {
        let extent = self.target_extent_length();
        let distance = self.effective_distance();
        let yaw =
            self.params.yaw + self.params.pivot_angle + self.stepper.angle_of(step);

        let pose = pose::solve(
            &self.frame,
            self.params.pitch,
            yaw,
            self.params.roll,
            distance,
        );

        let (fov, ortho_scale) = if self.params.auto_scale {
            (
                auto_fov(extent, distance),
                extent.max(MIN_ORTHO_SCALE) * AUTO_FIT_PADDING,
            )
        } else {
            (self.params.fov, self.params.ortho_scale)
        };
        let intrinsics = intrinsics::solve(
            self.params.camera_type,
            extent,
            distance,
            fov,
            ortho_scale,
        );

        CameraState { pose, intrinsics }
    }

    /// Re-derive the camera state from the parameters and current step.
    pub fn recompute(&mut self) {
        self.camera = self.camera_for_step(self.stepper.index());
        log::debug!(
            "orbit step {}/{}: camera at {}",
            self.stepper.index(),
            self.stepper.step_count(),
            self.camera.pose.position
        );
    }

    /// Push the current camera state to a host camera.
    ///
    /// # Errors
    ///
    /// Whatever the host reports for an unknown camera.
    pub fn apply<H: SceneHost + ?Sized>(
        &self,
        host: &mut H,
        camera: EntityId,
    ) -> Result<(), SpriteCamError> {
        host.set_camera(camera, &self.camera)
    }

    /// Point on the target the camera orbits.
    #[must_use]
    pub fn pivot(&self) -> Vec3 {
        self.frame.location
    }
}

/// Field of view that fits the target's bounding sphere at `distance`.
fn auto_fov(extent_length: f32, distance: f32) -> f32 {
    let radius = extent_length * 0.5;
    if distance <= radius || distance <= f32::EPSILON {
        return intrinsics::FOV_MAX;
    }
    clamp_fov(2.0 * (radius / distance).asin() * AUTO_FIT_PADDING)
}
