//! Camera model and the solvers that place and configure it.
//!
//! [`pose::solve`] positions the camera around an orbit frame and
//! [`intrinsics::solve`] sizes its projection for the target. Both are pure
//! functions of their inputs.

/// Camera pose, lens and projection types.
pub mod core;
/// Clip-plane and lens solver.
pub mod intrinsics;
/// Orbit pose solver.
pub mod pose;

pub use self::core::{CameraIntrinsics, CameraPose, CameraState, CameraType, Lens};
