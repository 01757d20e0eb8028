//! Target analysis, the orbit frame, and the host scene boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Bounding-box analysis of render targets.
pub mod bounds;
/// Orbit reference frame built from a target's bounds.
pub mod frame;
/// Host scene-graph trait and scoped selection handling.
pub mod host;
/// In-memory host implementation.
pub mod memory;

pub use bounds::{analyze, BoundingBox, TargetGeometry};
pub use frame::{HelperGizmo, OrbitFrame};
pub use host::{acquire_camera, with_selection_restored, SceneHost, SelectionSnapshot};
pub use memory::{MemoryScene, SceneEntity};

/// Opaque handle to an entity owned by the host scene.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
