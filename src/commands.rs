//! Implementations behind the `deskhive` subcommands.
//!
//! Each command returns its report as a string so `main` decides where it
//! goes and tests can assert on it.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

use anyhow::{bail, Context};
use deskhive_core::FloorPlan;
use deskhive_floormap::{EditorConfig, FloorMapEditor, FloorMapFile, SceneDocument};
use deskhive_settings::Config;

/// Object counts for one floor.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorSummary {
    pub name: String,
    pub level: i32,
    pub active: bool,
    /// Object count keyed by `data.type`; untagged objects count as "other".
    pub objects: BTreeMap<String, usize>,
}

impl FloorSummary {
    pub fn total(&self) -> usize {
        self.objects.values().sum()
    }

    pub fn count(&self, tag: &str) -> usize {
        self.objects.get(tag).copied().unwrap_or(0)
    }
}

/// Summarizes every floor of a plan, failing on the first broken snapshot.
pub fn summarize(plan: &FloorPlan) -> anyhow::Result<Vec<FloorSummary>> {
    plan.floors
        .iter()
        .map(|floor| {
            let mut objects = BTreeMap::new();
            if let Some(json) = floor.scene_json() {
                let document = SceneDocument::from_json(json)
                    .with_context(|| format!("Floor '{}' has an invalid scene", floor.name))?;
                for obj in &document.objects {
                    let tag = obj.tag().map_or("other", |t| t.as_str());
                    *objects.entry(tag.to_string()).or_insert(0) += 1;
                }
            }
            Ok(FloorSummary {
                name: floor.name.clone(),
                level: floor.level,
                active: plan.active_floor_id.as_ref() == Some(&floor.id),
                objects,
            })
        })
        .collect()
}

/// Human-readable report for `deskhive inspect`.
pub fn inspect(path: &Path) -> anyhow::Result<String> {
    let file = FloorMapFile::load_from_file(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let floors = summarize(&file.floor_map)?;

    let mut out = String::new();
    writeln!(out, "{} ({} floors)", file.metadata.name, floors.len())?;
    writeln!(
        out,
        "created {}, modified {}",
        file.metadata.created.format("%Y-%m-%d %H:%M"),
        file.metadata.modified.format("%Y-%m-%d %H:%M")
    )?;
    for floor in &floors {
        let marker = if floor.active { "*" } else { " " };
        let counts: Vec<String> = floor
            .objects
            .iter()
            .map(|(tag, n)| format!("{} {}", n, tag))
            .collect();
        let counts = if counts.is_empty() {
            "empty".to_string()
        } else {
            counts.join(", ")
        };
        writeln!(
            out,
            "{} [{}] {}: {}",
            marker, floor.level, floor.name, counts
        )?;
    }
    Ok(out)
}

/// Wraps a bare `{ floors, activeFloorId }` document into a floor-map file.
pub fn pack(plan_path: &Path, out: &Path, name: Option<&str>) -> anyhow::Result<usize> {
    let content = std::fs::read_to_string(plan_path)
        .with_context(|| format!("Failed to read {}", plan_path.display()))?;
    let mut plan: FloorPlan =
        serde_json::from_str(&content).context("Failed to parse floor plan")?;
    summarize(&plan)?;
    plan.normalize_active();

    let name = name
        .map(str::to_string)
        .or_else(|| {
            out.file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| "Floor map".to_string());
    FloorMapFile::new(name, plan.clone()).save_to_file(out)?;
    tracing::info!("Packed {} floors into {}", plan.len(), out.display());
    Ok(plan.len())
}

/// Writes the bare floor plan stored in a floor-map file.
pub fn unpack(path: &Path, out: &Path) -> anyhow::Result<usize> {
    let file = FloorMapFile::load_from_file(path)?;
    let json =
        serde_json::to_string_pretty(&file.floor_map).context("Failed to serialize floor plan")?;
    std::fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;
    tracing::info!(
        "Unpacked {} floors into {}",
        file.floor_map.len(),
        out.display()
    );
    Ok(file.floor_map.len())
}

/// Creates a floor-map file with `floors` empty floors.
pub fn create(out: &Path, floors: usize, config: &Config) -> anyhow::Result<()> {
    if floors == 0 {
        bail!("A floor map needs at least one floor");
    }

    let mut editor = FloorMapEditor::new(EditorConfig::from(config), None);
    editor.mount()?;
    for _ in 1..floors {
        editor.add_floor()?;
    }
    if let Some(first) = editor.floors().first().map(|f| f.id.clone()) {
        editor.switch_floor(&first)?;
    }
    editor.export_floor_map(out)
}

/// Loads the config at `path`, or the platform default location.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, std::path::PathBuf)> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => Config::default_config_path()?,
    };
    let config = Config::load_or_default(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))?;
    Ok((config, path))
}

/// Records `file` in the recent list, if a config file exists to hold it.
pub fn remember(config: &mut Config, config_path: &Path, file: &Path) -> anyhow::Result<()> {
    if !config_path.exists() {
        return Ok(());
    }
    let file = file.canonicalize().unwrap_or_else(|_| file.to_path_buf());
    config.add_recent_file(file);
    config.save_to_file(config_path)?;
    Ok(())
}
