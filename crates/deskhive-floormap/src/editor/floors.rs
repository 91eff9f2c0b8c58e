//! Floor operations for the editor.

use deskhive_core::{EditorEvent, FloorEvent, FloorId, NotificationEvent, Result};

use super::FloorMapEditor;
use crate::floors::{self, FloorSession};
use crate::tools::apply_tool_policy;

impl FloorMapEditor {
    /// Runs a floor operation with in-flight gestures settled beforehand
    /// and the tool policy reapplied afterwards.
    fn with_floor_session<T, F>(&mut self, op: F) -> Result<Option<T>>
    where
        F: FnOnce(&mut FloorSession<'_>) -> Result<T>,
    {
        if self.scene.is_none() {
            tracing::debug!("Floor operation ignored: no scene mounted");
            return Ok(None);
        }
        self.settle_gestures()?;

        let Some(scene) = self.scene.as_mut() else {
            return Ok(None);
        };
        let mut session = FloorSession::new(scene, &mut self.history, &mut self.plan);
        let result = op(&mut session);
        apply_tool_policy(scene, self.tools.active);
        result.map(Some)
    }

    fn after_switch(&mut self, from: Option<FloorId>) {
        let to = self.plan.active_floor_id.clone();
        if to == from {
            return;
        }
        if let Some(to) = to {
            self.events
                .publish(EditorEvent::Floor(FloorEvent::Switched { from, to }));
        }
        self.set_selected(None);
        self.publish_history();
    }

    /// Adds a floor above the highest one and switches to it.
    ///
    /// Returns `None` while unmounted.
    pub fn add_floor(&mut self) -> Result<Option<FloorId>> {
        let from = self.plan.active_floor_id.clone();
        let Some(id) = self.with_floor_session(|session| session.add_floor())? else {
            return Ok(None);
        };
        self.after_switch(from);
        self.notify_plan_changed();
        self.toast(NotificationEvent::success("Floor added"));
        Ok(Some(id))
    }

    /// Saves the current floor and shows `id`.
    ///
    /// Returns false when `id` is already active or nothing is mounted.
    pub fn switch_floor(&mut self, id: &FloorId) -> Result<bool> {
        let from = self.plan.active_floor_id.clone();
        let switched = self
            .with_floor_session(|session| session.switch_floor(id))?
            .unwrap_or(false);
        if switched {
            self.after_switch(from);
            self.notify_plan_changed();
        }
        Ok(switched)
    }

    /// Deletes a floor, moving to the first remaining one if it was active.
    ///
    /// Change listeners are notified even when the delete is rejected.
    pub fn delete_floor(&mut self, id: &FloorId) -> Result<()> {
        let from = self.plan.active_floor_id.clone();
        match self.with_floor_session(|session| session.delete_floor(id)) {
            Ok(Some(_)) => {}
            Ok(None) => return Ok(()),
            Err(e) => {
                self.notify_plan_changed();
                return Err(e);
            }
        }
        self.after_switch(from);
        self.notify_plan_changed();
        self.toast(NotificationEvent::success("Floor deleted"));
        Ok(())
    }

    /// Renames a floor.
    ///
    /// Only floor metadata changes, so this also works while unmounted.
    pub fn rename_floor(&mut self, id: &FloorId, name: &str) -> Result<()> {
        floors::rename_floor(&mut self.plan, id, name)?;
        tracing::info!("Renamed floor {} to {}", id, name);
        self.notify_plan_changed();
        Ok(())
    }
}
