//! Error handling for DeskHive
//!
//! Provides the error types shared by the floor-map editor layers:
//! - Scene errors (snapshot parsing and format versions)
//! - Floor errors (floor lookup)
//!
//! Missing-scene and empty-selection conditions are not errors; the editor
//! treats them as silent no-ops. All error types use `thiserror`.

use thiserror::Error;

/// Scene error type
///
/// Raised when a serialized scene cannot be turned back into objects.
#[derive(Error, Debug, Clone)]
pub enum SceneError {
    /// Snapshot text is not a valid scene document
    #[error("Malformed scene snapshot: {reason}")]
    MalformedSnapshot {
        /// The reason the snapshot was rejected.
        reason: String,
    },

    /// Snapshot was written by an incompatible format version
    #[error("Unsupported scene format version {version}")]
    UnsupportedVersion {
        /// The version string found in the snapshot.
        version: String,
    },
}

/// Floor error type
///
/// Represents failures of floor management operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FloorError {
    /// No floor with the given id exists
    #[error("Unknown floor: {id}")]
    UnknownFloor {
        /// The id that was looked up.
        id: String,
    },
}

/// Main error type for DeskHive
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Scene error
    #[error(transparent)]
    Scene(#[from] SceneError),

    /// Floor error
    #[error(transparent)]
    Floor(#[from] FloorError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding error outside of scene snapshots
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Wrap a snapshot parse failure
    pub fn malformed_snapshot(reason: impl std::fmt::Display) -> Self {
        Error::Scene(SceneError::MalformedSnapshot {
            reason: reason.to_string(),
        })
    }

    /// Check if this is a scene error
    pub fn is_scene_error(&self) -> bool {
        matches!(self, Error::Scene(_))
    }

    /// Check if this is a floor error
    pub fn is_floor_error(&self) -> bool {
        matches!(self, Error::Floor(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
