//! Event type definitions for the editor event bus.
//!
//! Events are cloneable and serializable so embedders can forward them over
//! whatever channel their view layer uses.

use serde::{Deserialize, Serialize};

use crate::data::{FloorId, FloorPlan};

/// Root event enum for all editor events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Floor collection and active-floor changes
    Floor(FloorEvent),
    /// Undo/redo availability
    History(HistoryEvent),
    /// Active tool and cursor changes
    Tool(ToolEvent),
    /// Selected object changes
    Selection(SelectionEvent),
    /// User-facing confirmations (toasts)
    Notification(NotificationEvent),
}

impl EditorEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            EditorEvent::Floor(_) => EventCategory::Floor,
            EditorEvent::History(_) => EventCategory::History,
            EditorEvent::Tool(_) => EventCategory::Tool,
            EditorEvent::Selection(_) => EventCategory::Selection,
            EditorEvent::Notification(_) => EventCategory::Notification,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            EditorEvent::Floor(e) => e.description(),
            EditorEvent::History(e) => e.description(),
            EditorEvent::Tool(e) => e.description(),
            EditorEvent::Selection(e) => e.description(),
            EditorEvent::Notification(e) => e.message.clone(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Floor,
    History,
    Tool,
    Selection,
    Notification,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Floor => write!(f, "Floor"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Tool => write!(f, "Tool"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Notification => write!(f, "Notification"),
        }
    }
}

/// Floor-related events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum FloorEvent {
    /// A persisted mutation happened; carries the whole plan for saving.
    PlanChanged {
        /// The floor collection after the mutation.
        plan: FloorPlan,
    },
    /// The active floor changed.
    Switched {
        /// Floor that was active before, if any.
        from: Option<FloorId>,
        /// Floor that is active now.
        to: FloorId,
    },
}

impl FloorEvent {
    fn description(&self) -> String {
        match self {
            FloorEvent::PlanChanged { plan } => format!("Floor plan changed ({} floors)", plan.len()),
            FloorEvent::Switched { from, to } => match from {
                Some(from) => format!("Switched floor {} -> {}", from, to),
                None => format!("Switched to floor {}", to),
            },
        }
    }
}

/// Undo/redo state after a history change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEvent {
    pub index: usize,
    pub len: usize,
    pub can_undo: bool,
    pub can_redo: bool,
}

impl HistoryEvent {
    fn description(&self) -> String {
        format!(
            "History {}/{} (undo: {}, redo: {})",
            self.index + 1,
            self.len,
            self.can_undo,
            self.can_redo
        )
    }
}

/// Active tool change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolEvent {
    /// Tool name as shown in the toolbar.
    pub tool: String,
    /// Cursor the view layer should display.
    pub cursor: String,
}

impl ToolEvent {
    fn description(&self) -> String {
        format!("Tool {} (cursor {})", self.tool, self.cursor)
    }
}

/// Selected object change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionEvent {
    /// Session-local object handle, `None` when the selection was cleared.
    pub object: Option<u64>,
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self.object {
            Some(id) => format!("Selected object {}", id),
            None => "Selection cleared".to_string(),
        }
    }
}

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// User-facing confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEvent {
    pub level: NotificationLevel,
    pub message: String,
}

impl NotificationEvent {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }
}
