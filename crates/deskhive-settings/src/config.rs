//! Configuration for the floor-map editor
//!
//! Provides configuration file handling and validation. Supports JSON and TOML
//! file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Canvas settings (surface size, background)
//! - Grid settings (spacing, visibility, snapping, dot style)
//! - Seat settings (categories, fallback colour, radius)
//! - History settings (retention limit)

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

const CONFIG_DIR_NAME: &str = "deskhive";
const CONFIG_FILE_NAME: &str = "floormap.toml";
const MAX_RECENT_FILES: usize = 10;

/// Canvas surface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSettings {
    /// Logical width in pixels
    pub width: f64,
    /// Logical height in pixels
    pub height: f64,
    /// CSS background colour
    pub background: String,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            background: "#f3f4f6".to_string(),
        }
    }
}

/// Grid settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Spacing between dots, also the snapping step
    pub size: f64,
    /// Whether grid dots are drawn
    pub show: bool,
    /// Whether new and moved objects snap to the grid
    pub snap: bool,
    pub dot_radius: f64,
    pub dot_color: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: 20.0,
            show: true,
            snap: true,
            dot_radius: 1.0,
            dot_color: "#cccccc".to_string(),
        }
    }
}

/// A seat category as configured by the workspace owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCategory {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Seat settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatSettings {
    /// Fill used when no category is configured
    pub default_color: String,
    pub radius: f64,
    pub categories: Vec<SeatCategory>,
}

impl Default for SeatSettings {
    fn default() -> Self {
        Self {
            categories: Vec::new(),
            default_color: "#3b82f6".to_string(),
            radius: 15.0,
        }
    }
}

impl SeatSettings {
    pub fn category(&self, id: &str) -> Option<&SeatCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

/// History settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistorySettings {
    /// Maximum retained snapshots per floor; unlimited when absent
    pub limit: Option<usize>,
}

/// Complete editor configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Recently opened floor-map files, newest first
    pub recent_files: Vec<PathBuf>,
    pub canvas: CanvasSettings,
    pub grid: GridSettings,
    pub seats: SeatSettings,
    pub history: HistorySettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the config file in the platform config directory
    pub fn default_config_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config at `path`, or defaults when the file does not exist
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match extension(path) {
            Some("json") => serde_json::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path) {
            Some("json") => serde_json::to_string_pretty(self)?,
            Some("toml") => toml::to_string_pretty(self)?,
            other => {
                return Err(ConfigError::UnsupportedFormat(other.unwrap_or("").to_string()).into())
            }
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| SettingsError::ConfigDirectory(e.to_string()))?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return Err(SettingsError::invalid(
                "canvas",
                "width and height must be > 0",
            ));
        }

        if self.grid.size <= 0.0 {
            return Err(SettingsError::invalid("grid.size", "must be > 0"));
        }

        if self.grid.dot_radius < 0.0 {
            return Err(SettingsError::invalid("grid.dot_radius", "must be >= 0"));
        }

        if self.seats.radius <= 0.0 {
            return Err(SettingsError::invalid("seats.radius", "must be > 0"));
        }

        let mut ids = HashSet::new();
        for category in &self.seats.categories {
            if !ids.insert(category.id.as_str()) {
                return Err(SettingsError::invalid(
                    "seats.categories",
                    format!("duplicate category id '{}'", category.id),
                ));
            }
        }

        if self.history.limit == Some(0) {
            return Err(SettingsError::invalid("history.limit", "must be > 0"));
        }

        Ok(())
    }

    /// Add file to recent files list
    pub fn add_recent_file(&mut self, path: PathBuf) {
        self.recent_files.retain(|f| f != &path);
        self.recent_files.insert(0, path);
        self.recent_files.truncate(MAX_RECENT_FILES);
    }
}

fn extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|ext| ext.to_str())
}
