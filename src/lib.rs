//! # DeskHive
//!
//! Headless floor-map editor for the DeskHive workspace-booking platform.
//!
//! ## Architecture
//!
//! DeskHive is organized as a workspace with multiple crates:
//!
//! 1. **deskhive-core** - Floor data model, errors, editor event bus
//! 2. **deskhive-settings** - Canvas, grid, seat and history configuration
//! 3. **deskhive-floormap** - Scene, grid, history, floors, tools, interaction
//!    and the `FloorMapEditor` orchestrator
//! 4. **deskhive** - This crate: logging setup, re-exports and the `deskhive`
//!    command-line tool for inspecting and converting floor-map files

pub mod commands;

pub use deskhive_core::{
    EditorEvent, Error, EventBus, EventCategory, EventFilter, Floor, FloorError, FloorEvent,
    FloorId, FloorPlan, NotificationEvent, NotificationLevel, Result, SceneError,
};

pub use deskhive_floormap::{
    CursorStyle, EditorConfig, FloorMapEditor, FloorMapFile, Grid, InputEvent, ObjectKind,
    ObjectTag, Point, Scene, SceneDocument, SceneObject, ShapeKind, SnapshotHistory, Tool,
    Viewport,
};

pub use deskhive_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Pretty formatting on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support
/// - `level` as the floor when RUST_LOG is unset
pub fn init_logging(level: tracing::Level) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
