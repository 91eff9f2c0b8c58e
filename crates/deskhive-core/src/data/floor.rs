//! Floor records and the floor plan that the editor persists.
//!
//! The wire shape is the one the booking backend stores on a workspace:
//! `{ "floors": [{ "id", "name", "canvasJson", "level" }], "activeFloorId" }`.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque floor identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(String);

impl FloorId {
    /// Generates a fresh identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FloorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FloorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One floor of a workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Floor {
    pub id: FloorId,
    pub name: String,
    /// Serialized scene, `None` until the floor is first saved.
    #[serde(default)]
    pub canvas_json: Option<String>,
    #[serde(default = "default_level")]
    pub level: i32,
}

fn default_level() -> i32 {
    1
}

impl Floor {
    /// Creates an empty floor named after its level.
    pub fn new(level: i32) -> Self {
        Self {
            id: FloorId::generate(),
            name: format!("Floor {}", level),
            canvas_json: None,
            level,
        }
    }

    /// Returns the stored scene, treating an empty string as absent.
    pub fn scene_json(&self) -> Option<&str> {
        self.canvas_json.as_deref().filter(|json| !json.is_empty())
    }
}

/// The full floor collection plus the active floor reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorPlan {
    #[serde(default)]
    pub floors: Vec<Floor>,
    #[serde(default)]
    pub active_floor_id: Option<FloorId>,
}

impl FloorPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of floors.
    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    /// Level for the next floor: one above the highest, or 1.
    pub fn next_level(&self) -> i32 {
        self.floors
            .iter()
            .map(|f| f.level)
            .max()
            .map_or(1, |level| level + 1)
    }

    pub fn get(&self, id: &FloorId) -> Option<&Floor> {
        self.floors.iter().find(|f| &f.id == id)
    }

    pub fn get_mut(&mut self, id: &FloorId) -> Option<&mut Floor> {
        self.floors.iter_mut().find(|f| &f.id == id)
    }

    pub fn contains(&self, id: &FloorId) -> bool {
        self.get(id).is_some()
    }

    /// The active floor, if the reference points at an existing floor.
    pub fn active_floor(&self) -> Option<&Floor> {
        self.active_floor_id.as_ref().and_then(|id| self.get(id))
    }

    /// Appends a floor and returns its id.
    pub fn push(&mut self, floor: Floor) -> FloorId {
        let id = floor.id.clone();
        self.floors.push(floor);
        id
    }

    /// Removes a floor, returning it if it existed. The active reference is
    /// left untouched; callers decide where to go next.
    pub fn remove(&mut self, id: &FloorId) -> Option<Floor> {
        let index = self.floors.iter().position(|f| &f.id == id)?;
        Some(self.floors.remove(index))
    }

    /// Renames a floor. Returns `false` when the id is unknown.
    pub fn rename(&mut self, id: &FloorId, name: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(floor) => {
                floor.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Writes a scene snapshot into the active floor.
    pub fn store_active_snapshot(&mut self, json: &str) -> bool {
        let Some(id) = self.active_floor_id.clone() else {
            return false;
        };
        match self.get_mut(&id) {
            Some(floor) => {
                floor.canvas_json = Some(json.to_string());
                true
            }
            None => false,
        }
    }

    /// Points the active reference at a valid floor: keeps it if it exists,
    /// else falls back to the first floor.
    pub fn normalize_active(&mut self) {
        let valid = self
            .active_floor_id
            .as_ref()
            .is_some_and(|id| self.contains(id));
        if !valid {
            self.active_floor_id = self.floors.first().map(|f| f.id.clone());
        }
    }
}
