//! Linear snapshot history for undo/redo.
//!
//! Each entry is a complete serialized scene. Saving truncates the redo
//! tail before appending; the cursor always points at the entry matching
//! what is on screen. History is per floor and reset on floor switch.

use deskhive_core::{FloorPlan, HistoryEvent, Result};

use crate::grid::ensure_grid_is_on_bottom;
use crate::scene::Scene;
use crate::serialization::SceneDocument;

#[derive(Debug, Clone, Default)]
pub struct SnapshotHistory {
    entries: Vec<String>,
    index: usize,
    limit: Option<usize>,
}

impl SnapshotHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `limit` entries.
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit: limit.filter(|l| *l > 0),
            ..Self::default()
        }
    }

    /// Resets history to a single entry holding the current scene.
    pub fn init_history(&mut self, scene: &Scene) -> Result<()> {
        let snapshot = scene.to_json()?;
        self.entries.clear();
        self.entries.push(snapshot);
        self.index = 0;
        Ok(())
    }

    /// Records the current scene and stores it into the active floor.
    pub fn save_state(&mut self, scene: &Scene, plan: &mut FloorPlan) -> Result<()> {
        let snapshot = scene.to_json()?;

        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
        self.apply_limit();

        if let Some(current) = self.entries.get(self.index) {
            plan.store_active_snapshot(current);
        }
        tracing::debug!("Saved history entry {}/{}", self.index + 1, self.entries.len());
        Ok(())
    }

    fn apply_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.entries.len() > limit {
            let excess = self.entries.len() - limit;
            self.entries.drain(..excess);
            self.index = self.index.saturating_sub(excess);
        }
    }

    /// Steps back one entry. Returns false when there is nothing to undo.
    pub fn undo(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.can_undo() {
            return Ok(false);
        }
        self.restore(scene, self.index - 1)?;
        Ok(true)
    }

    /// Steps forward one entry. Returns false when there is nothing to redo.
    pub fn redo(&mut self, scene: &mut Scene) -> Result<bool> {
        if !self.can_redo() {
            return Ok(false);
        }
        self.restore(scene, self.index + 1)?;
        Ok(true)
    }

    fn restore(&mut self, scene: &mut Scene, target: usize) -> Result<()> {
        let Some(snapshot) = self.entries.get(target) else {
            return Ok(());
        };
        let document = SceneDocument::from_json(snapshot)?;
        self.index = target;
        scene.replace_with(document);
        ensure_grid_is_on_bottom(scene);
        tracing::debug!("Restored history entry {}/{}", self.index + 1, self.entries.len());
        Ok(())
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.index).map(String::as_str)
    }

    /// Undo/redo state for the event bus.
    pub fn status(&self) -> HistoryEvent {
        HistoryEvent {
            index: self.index,
            len: self.entries.len(),
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }
}
