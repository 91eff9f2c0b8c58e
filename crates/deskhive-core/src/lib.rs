//! # DeskHive Core
//!
//! Core types, errors, and the editor event bus for DeskHive.
//! Provides the floor data model shared with the booking backend and the
//! notification channel between the floor-map editor and its view layer.

pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{Floor, FloorId, FloorPlan};

pub use error::{Error, FloorError, Result, SceneError};

pub use event_bus::{
    EditorEvent, EventBus, EventBusConfig, EventCategory, EventFilter, FloorEvent, HistoryEvent,
    NotificationEvent, NotificationLevel, SelectionEvent, SubscriptionId, ToolEvent,
};

pub use types::{thread_safe_vec, DataCallback, ThreadSafeVec};
