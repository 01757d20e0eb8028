//! In-memory [`SceneHost`] used by the CLI and tests.

use glam::{Quat, Vec3};
use rustc_hash::FxHashMap;

use super::bounds::TargetGeometry;
use super::host::{SceneHost, SelectionSnapshot};
use super::EntityId;
use crate::camera::CameraState;
use crate::error::SpriteCamError;

/// What an entity in a [`MemoryScene`] is.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneEntity {
    /// A box-shaped render target.
    Target {
        /// Human-readable name, used for output folders.
        name: String,
        /// World-space geometry.
        geometry: TargetGeometry,
    },
    /// A camera, holding the state last pushed to it.
    Camera {
        /// Last applied camera state, `None` until first update.
        state: Option<CameraState>,
    },
}

/// Flat entity table with a selection, standing in for a host scene graph.
#[derive(Debug, Default)]
pub struct MemoryScene {
    entities: FxHashMap<EntityId, SceneEntity>,
    next_id: u32,
    selection: SelectionSnapshot,
    camera_updates: usize,
}

impl MemoryScene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, entity: SceneEntity) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        let _ = self.entities.insert(id, entity);
        id
    }

    /// Add a box target and return its handle.
    pub fn add_box_target(
        &mut self,
        name: &str,
        center: Vec3,
        orientation: Quat,
        dimensions: Vec3,
    ) -> EntityId {
        self.insert(SceneEntity::Target {
            name: name.to_owned(),
            geometry: TargetGeometry::from_oriented_box(
                center,
                orientation,
                dimensions,
            ),
        })
    }

    /// Add a camera and return its handle.
    pub fn add_camera(&mut self) -> EntityId {
        self.insert(SceneEntity::Camera { state: None })
    }

    /// Remove an entity, dropping it from the selection as well.
    pub fn remove(&mut self, id: EntityId) -> Option<SceneEntity> {
        self.selection.selected.retain(|s| *s != id);
        if self.selection.active == Some(id) {
            self.selection.active = None;
        }
        self.entities.remove(&id)
    }

    /// Look up an entity.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&SceneEntity> {
        self.entities.get(&id)
    }

    /// Last state pushed to a camera.
    #[must_use]
    pub fn camera_state(&self, id: EntityId) -> Option<&CameraState> {
        match self.entities.get(&id) {
            Some(SceneEntity::Camera { state }) => state.as_ref(),
            _ => None,
        }
    }

    /// How many times any camera has been updated.
    #[must_use]
    pub fn camera_updates(&self) -> usize {
        self.camera_updates
    }

    /// Select a set of entities, making the last one active.
    pub fn set_selection(&mut self, ids: &[EntityId]) {
        self.selection = SelectionSnapshot {
            selected: ids.to_vec(),
            active: ids.last().copied(),
        };
    }
}

impl SceneHost for MemoryScene {
    fn target_geometry(&self, id: EntityId) -> Option<TargetGeometry> {
        match self.entities.get(&id) {
            Some(SceneEntity::Target { geometry, .. }) => Some(geometry.clone()),
            _ => None,
        }
    }

    fn set_camera(
        &mut self,
        camera: EntityId,
        state: &CameraState,
    ) -> Result<(), SpriteCamError> {
        match self.entities.get_mut(&camera) {
            Some(SceneEntity::Camera { state: slot }) => {
                *slot = Some(*state);
                self.camera_updates += 1;
                Ok(())
            }
            _ => Err(SpriteCamError::MissingEntity(camera)),
        }
    }

    fn selection(&self) -> SelectionSnapshot {
        self.selection.clone()
    }

    fn restore_selection(&mut self, snapshot: SelectionSnapshot) {
        // Entities removed since the snapshot stay unselected
        let selected = snapshot
            .selected
            .into_iter()
            .filter(|id| self.entities.contains_key(id))
            .collect();
        let active = snapshot
            .active
            .filter(|id| self.entities.contains_key(id));
        self.selection = SelectionSnapshot { selected, active };
    }

    fn select_only(&mut self, id: EntityId) {
        self.selection = SelectionSnapshot {
            selected: vec![id],
            active: Some(id),
        };
    }

    fn spawn_camera(&mut self) -> EntityId {
        self.add_camera()
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{catch_unwind, AssertUnwindSafe};

    use super::*;
    use crate::scene::host::{acquire_camera, with_selection_restored};

    #[test]
    fn selection_restored_after_failure() {
        let mut scene = MemoryScene::new();
        let target = scene.add_box_target(
            "crate",
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ONE,
        );
        let camera = scene.add_camera();
        scene.set_selection(&[target]);

        let result: Result<(), _> = with_selection_restored(&mut scene, |s| {
            s.select_only(camera);
            Err(SpriteCamError::MissingEntity(EntityId(99)))
        });

        assert!(result.is_err());
        assert_eq!(scene.selection().selected, vec![target]);
        assert_eq!(scene.selection().active, Some(target));
    }

    #[test]
    fn selection_restored_after_success() {
        let mut scene = MemoryScene::new();
        let camera = scene.add_camera();
        let value = with_selection_restored(&mut scene, |s| {
            s.select_only(camera);
            Ok(7)
        })
        .unwrap();
        assert_eq!(value, 7);
        assert!(scene.selection().selected.is_empty());
    }

    #[test]
    fn selection_restored_after_panic() {
        let mut scene = MemoryScene::new();
        let target = scene.add_box_target(
            "crate",
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ONE,
        );
        let camera = scene.add_camera();
        scene.set_selection(&[target]);

        let outcome = catch_unwind(AssertUnwindSafe(|| {
            let _: Result<(), SpriteCamError> =
                with_selection_restored(&mut scene, |s| {
                    s.select_only(camera);
                    panic!("renderer crashed");
                });
        }));

        assert!(outcome.is_err());
        assert_eq!(scene.selection().selected, vec![target]);
        assert_eq!(scene.selection().active, Some(target));
    }

    #[test]
    fn acquire_camera_reuses_or_spawns() {
        let mut scene = MemoryScene::new();
        let existing = scene.add_camera();

        assert_eq!(acquire_camera(&mut scene, true, Some(existing)), existing);

        let spawned = acquire_camera(&mut scene, false, Some(existing));
        assert_ne!(spawned, existing);
        assert!(matches!(
            scene.get(spawned),
            Some(SceneEntity::Camera { state: None })
        ));

        let fallback = acquire_camera(&mut scene, true, None);
        assert_ne!(fallback, spawned);
        assert!(matches!(scene.get(fallback), Some(SceneEntity::Camera { .. })));
    }

    #[test]
    fn set_camera_rejects_targets() {
        let mut scene = MemoryScene::new();
        let target = scene.add_box_target(
            "crate",
            Vec3::ZERO,
            Quat::IDENTITY,
            Vec3::ONE,
        );
        let state = CameraState::default();
        assert!(matches!(
            scene.set_camera(target, &state),
            Err(SpriteCamError::MissingEntity(id)) if id == target
        ));
        assert_eq!(scene.camera_updates(), 0);
    }

    #[test]
    fn removed_entities_do_not_come_back_on_restore() {
        let mut scene = MemoryScene::new();
        let a = scene.add_camera();
        let b = scene.add_camera();
        scene.set_selection(&[a, b]);
        let snapshot = scene.selection();
        let _ = scene.remove(b);
        scene.restore_selection(snapshot);
        assert_eq!(scene.selection().selected, vec![a]);
        assert_eq!(scene.selection().active, None);
    }
}
