//! DeskHive Settings Crate
//!
//! Handles floor-map editor configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{CanvasSettings, Config, GridSettings, HistorySettings, SeatCategory, SeatSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
