//! Discrete orbit stepping and the session that drives the camera.

/// Parameter ownership and explicit pose recomputation.
pub mod session;
/// Wraparound step index.
pub mod stepper;

pub use session::{OrbitParams, OrbitSession};
pub use stepper::{wraparound, OrbitStepper, MAX_STEPS, MIN_STEPS};
