//! Floor management: adding, switching, deleting and renaming floors.
//!
//! A [`FloorSession`] borrows the pieces of editor state a floor operation
//! touches. Taking them by `&mut` means a switch can never start while
//! another one is still running.

use deskhive_core::{Floor, FloorError, FloorId, FloorPlan, Result};

use crate::grid::{ensure_grid_is_on_bottom, is_grid_object};
use crate::history::SnapshotHistory;
use crate::scene::Scene;
use crate::serialization::SceneDocument;

pub struct FloorSession<'a> {
    pub scene: &'a mut Scene,
    pub history: &'a mut SnapshotHistory,
    pub plan: &'a mut FloorPlan,
}

fn unknown(id: &FloorId) -> FloorError {
    FloorError::UnknownFloor {
        id: id.to_string(),
    }
}

impl<'a> FloorSession<'a> {
    pub fn new(scene: &'a mut Scene, history: &'a mut SnapshotHistory, plan: &'a mut FloorPlan) -> Self {
        Self {
            scene,
            history,
            plan,
        }
    }

    /// Appends an empty floor one level above the highest and switches to it.
    pub fn add_floor(&mut self) -> Result<FloorId> {
        let floor = Floor::new(self.plan.next_level());
        tracing::info!("Adding {} (level {})", floor.name, floor.level);
        let id = self.plan.push(floor);
        self.switch_floor(&id)?;
        Ok(id)
    }

    /// Saves the current floor and loads `id` into the scene.
    ///
    /// Returns `Ok(false)` when `id` is already active. The target snapshot
    /// is parsed before anything changes, so a malformed floor leaves the
    /// editor on the current floor.
    pub fn switch_floor(&mut self, id: &FloorId) -> Result<bool> {
        let target = self.plan.get(id).ok_or_else(|| unknown(id))?;
        if self.plan.active_floor_id.as_ref() == Some(id) {
            return Ok(false);
        }

        let document = target.scene_json().map(SceneDocument::from_json).transpose()?;

        if self.plan.active_floor().is_some() {
            self.history.save_state(self.scene, self.plan)?;
        }

        self.plan.active_floor_id = Some(id.clone());
        self.scene.discard_active();
        self.scene.retain(is_grid_object);
        if let Some(document) = document {
            self.scene.replace_with(document);
        }
        ensure_grid_is_on_bottom(self.scene);
        self.history.init_history(self.scene)?;

        tracing::info!("Switched to floor {}", id);
        Ok(true)
    }

    /// Removes a floor. When it was active, moves to the first remaining
    /// floor, or leaves a grid-only scene if none remain.
    ///
    /// Returns the active floor afterwards.
    pub fn delete_floor(&mut self, id: &FloorId) -> Result<Option<FloorId>> {
        let was_active = self.plan.active_floor_id.as_ref() == Some(id);
        if was_active {
            // The fallback floor must load before anything is removed.
            let fallback = self.plan.floors.iter().find(|f| &f.id != id);
            if let Some(json) = fallback.and_then(Floor::scene_json) {
                SceneDocument::from_json(json)?;
            }
        }
        let removed = self.plan.remove(id).ok_or_else(|| unknown(id))?;
        tracing::info!("Deleted floor {}", removed.name);

        if was_active {
            self.plan.active_floor_id = None;
            match self.plan.floors.first().map(|f| f.id.clone()) {
                Some(first) => {
                    self.switch_floor(&first)?;
                }
                None => {
                    self.scene.discard_active();
                    self.scene.retain(is_grid_object);
                    self.history.init_history(self.scene)?;
                }
            }
        }

        Ok(self.plan.active_floor_id.clone())
    }

    /// Renames a floor.
    pub fn rename_floor(&mut self, id: &FloorId, name: &str) -> Result<()> {
        rename_floor(self.plan, id, name)
    }
}

/// Renames a floor in a plan; metadata only, the scene is not touched.
pub fn rename_floor(plan: &mut FloorPlan, id: &FloorId, name: &str) -> Result<()> {
    if plan.rename(id, name) {
        Ok(())
    } else {
        Err(unknown(id).into())
    }
}
