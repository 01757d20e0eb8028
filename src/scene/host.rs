//! Boundary between the orbit engine and the host application's scene graph.
//!
//! The engine never holds references into the host. It talks in
//! [`EntityId`] handles and plain values, so a host can be a 3D editor, a
//! game engine, or the in-memory [`MemoryScene`](super::MemoryScene).

use serde::{Deserialize, Serialize};

use super::bounds::TargetGeometry;
use super::EntityId;
use crate::camera::CameraState;
use crate::error::SpriteCamError;

/// Selection state of the host, captured by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    /// Selected entities, in host order.
    pub selected: Vec<EntityId>,
    /// The active entity, if any.
    pub active: Option<EntityId>,
}

/// Query/command interface the engine uses to reach the host scene.
pub trait SceneHost {
    /// World-space geometry of an entity, or `None` if the handle is unknown.
    fn target_geometry(&self, id: EntityId) -> Option<TargetGeometry>;

    /// Overwrite the transform and lens of a camera entity.
    ///
    /// # Errors
    ///
    /// [`SpriteCamError::MissingEntity`] when `camera` is not a camera the
    /// host knows.
    fn set_camera(
        &mut self,
        camera: EntityId,
        state: &CameraState,
    ) -> Result<(), SpriteCamError>;

    /// Current selection.
    fn selection(&self) -> SelectionSnapshot;

    /// Replace the selection with a previously captured snapshot.
    fn restore_selection(&mut self, snapshot: SelectionSnapshot);

    /// Make `id` the only selected and active entity.
    fn select_only(&mut self, id: EntityId);

    /// Create a new camera entity and return its handle.
    fn spawn_camera(&mut self) -> EntityId;
}

/// Pick the camera a run drives.
///
/// With `use_existing` set, `existing` is used as-is; when no camera was
/// given a new one is spawned anyway. Without it a fresh camera is always
/// spawned.
pub fn acquire_camera<H: SceneHost + ?Sized>(
    host: &mut H,
    use_existing: bool,
    existing: Option<EntityId>,
) -> EntityId {
    match (use_existing, existing) {
        (true, Some(id)) => id,
        (true, None) => {
            log::warn!("no existing camera given, spawning one");
            host.spawn_camera()
        }
        (false, _) => {
            let id = host.spawn_camera();
            log::debug!("spawned camera {id}");
            id
        }
    }
}

/// Puts a captured selection back when dropped, including during unwinding.
struct SelectionGuard<'a, H: SceneHost + ?Sized> {
    host: &'a mut H,
    snapshot: SelectionSnapshot,
}

impl<H: SceneHost + ?Sized> Drop for SelectionGuard<'_, H> {
    fn drop(&mut self) {
        self.host.restore_selection(std::mem::take(&mut self.snapshot));
    }
}

/// Run `f` and put the host's selection back the way it was, whether `f`
/// succeeds, fails or panics.
///
/// # Errors
///
/// Whatever `f` returns.
pub fn with_selection_restored<H, T, F>(
    host: &mut H,
    f: F,
) -> Result<T, SpriteCamError>
where
    H: SceneHost + ?Sized,
    F: FnOnce(&mut H) -> Result<T, SpriteCamError>,
{
    let snapshot = host.selection();
    let mut guard = SelectionGuard { host, snapshot };
    let result = f(&mut *guard.host);
    drop(guard);
    result
}
