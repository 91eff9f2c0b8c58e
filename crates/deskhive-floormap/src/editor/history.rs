//! Save, undo and redo for the editor.

use deskhive_core::Result;

use super::FloorMapEditor;
use crate::tools::apply_tool_policy;

impl FloorMapEditor {
    /// Records the scene in history, stores it into the active floor and
    /// notifies change listeners.
    pub fn save_history(&mut self) -> Result<()> {
        let Some(scene) = self.scene.as_ref() else {
            tracing::debug!("save_history ignored: no scene mounted");
            return Ok(());
        };
        self.history.save_state(scene, &mut self.plan)?;
        self.notify_plan_changed();
        self.publish_history();
        Ok(())
    }

    /// Steps back one snapshot. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> Result<bool> {
        self.step(true)
    }

    /// Steps forward one snapshot. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> Result<bool> {
        self.step(false)
    }

    fn step(&mut self, back: bool) -> Result<bool> {
        if self.scene.is_none() {
            tracing::debug!("undo/redo ignored: no scene mounted");
            return Ok(false);
        }
        self.settle_gestures()?;

        let Some(scene) = self.scene.as_mut() else {
            return Ok(false);
        };
        let moved = if back {
            self.history.undo(scene)?
        } else {
            self.history.redo(scene)?
        };
        if !moved {
            return Ok(false);
        }

        apply_tool_policy(scene, self.tools.active);
        if let Some(current) = self.history.current() {
            self.plan.store_active_snapshot(current);
        }

        self.set_selected(None);
        self.notify_plan_changed();
        self.publish_history();
        Ok(true)
    }
}
