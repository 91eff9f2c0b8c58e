//! Serialization for scene snapshots and floor-map files.
//!
//! Scene snapshots are what a floor stores in `canvasJson`:
//! `{ "version": "1.0", "background": "...", "objects": [...] }`.
//! Floor-map files wrap a whole [`FloorPlan`] with metadata so it can be
//! exported and imported as a single pretty-printed JSON document.

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

use deskhive_core::{Error, FloorPlan, Result, SceneError};

use crate::model::{ObjectTag, SceneObject};
use crate::scene::Scene;

/// Scene snapshot format version
pub const SCENE_FORMAT_VERSION: &str = "1.0";

/// Floor-map file format version
const FILE_FORMAT_VERSION: &str = "1.0";

/// Serialized scene contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub version: String,
    pub background: String,
    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl SceneDocument {
    /// Captures the persistent objects of a scene.
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            version: SCENE_FORMAT_VERSION.to_string(),
            background: scene.background().to_string(),
            objects: scene
                .objects()
                .iter()
                .filter(|o| !o.transient && !o.has_tag(ObjectTag::Grid))
                .cloned()
                .collect(),
        }
    }

    /// Parses and version-checks a snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: Self = serde_json::from_str(json).map_err(Error::malformed_snapshot)?;
        if document.version != SCENE_FORMAT_VERSION {
            return Err(SceneError::UnsupportedVersion {
                version: document.version,
            }
            .into());
        }
        Ok(document)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Floor-map file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorMapMetadata {
    pub name: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

/// Complete floor-map file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FloorMapFile {
    pub version: String,
    pub metadata: FloorMapMetadata,
    pub floor_map: FloorPlan,
}

impl FloorMapFile {
    /// Creates a new file wrapper around a floor plan.
    pub fn new(name: impl Into<String>, floor_map: FloorPlan) -> Self {
        let now = Utc::now();
        Self {
            version: FILE_FORMAT_VERSION.to_string(),
            metadata: FloorMapMetadata {
                name: name.into(),
                created: now,
                modified: now,
            },
            floor_map,
        }
    }

    /// Save floor map to file as pretty JSON.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize floor map")?;
        std::fs::write(path.as_ref(), json).context("Failed to write floor-map file")?;
        Ok(())
    }

    /// Load floor map from file.
    ///
    /// Every stored floor snapshot is checked, so a file that loads can be
    /// switched through without parse errors.
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read floor-map file")?;
        let mut file: Self =
            serde_json::from_str(&content).context("Failed to parse floor-map file")?;

        if file.version != FILE_FORMAT_VERSION {
            bail!("Unsupported floor-map file version {}", file.version);
        }

        for floor in &file.floor_map.floors {
            if let Some(json) = floor.scene_json() {
                SceneDocument::from_json(json)
                    .with_context(|| format!("Floor '{}' has an invalid scene", floor.name))?;
            }
        }

        file.floor_map.normalize_active();
        file.metadata.modified = Utc::now();
        Ok(file)
    }
}
