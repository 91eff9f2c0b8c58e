//! Floor-map export and import.

use std::path::Path;

use deskhive_core::{Floor, NotificationEvent};

use super::FloorMapEditor;
use crate::serialization::FloorMapFile;

impl FloorMapEditor {
    /// Writes the floor plan to a floor-map file.
    pub fn export_floor_map(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("Floor map");

        FloorMapFile::new(name, self.plan.clone()).save_to_file(path)?;
        tracing::info!("Exported {} floors to {}", self.plan.len(), path.display());
        Ok(())
    }

    /// Replaces the floor plan with the one stored in a floor-map file.
    ///
    /// Undo history restarts from the imported active floor.
    pub fn import_floor_map(&mut self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let file = FloorMapFile::load_from_file(path)?;

        self.reset_gestures();
        let mut plan = file.floor_map;
        if plan.is_empty() {
            plan.push(Floor::new(1));
            plan.normalize_active();
        }
        self.plan = plan;
        self.load_active_floor()?;
        self.set_selected(None);

        tracing::info!(
            "Imported '{}' with {} floors from {}",
            file.metadata.name,
            self.plan.len(),
            path.display()
        );
        self.notify_plan_changed();
        self.publish_history();
        self.toast(NotificationEvent::success("Floor map imported"));
        Ok(())
    }
}
