//! Drawing tools and the interaction policy each one applies to the scene.

use std::fmt;
use std::str::FromStr;

use deskhive_settings::SeatSettings;

use crate::grid::is_grid_object;
use crate::model::ObjectTag;
use crate::scene::{CursorStyle, Scene};

/// Toolbar tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Select,
    Hand,
    Eraser,
    Line,
    Shape,
    Seat,
    Text,
}

impl Tool {
    pub const ALL: [Tool; 7] = [
        Tool::Select,
        Tool::Hand,
        Tool::Eraser,
        Tool::Line,
        Tool::Shape,
        Tool::Seat,
        Tool::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::Select => "select",
            Tool::Hand => "hand",
            Tool::Eraser => "eraser",
            Tool::Line => "line",
            Tool::Shape => "shape",
            Tool::Seat => "seat",
            Tool::Text => "text",
        }
    }

    /// Default and hover cursors while this tool is active.
    pub fn cursors(&self) -> (CursorStyle, CursorStyle) {
        match self {
            Tool::Hand => (CursorStyle::Grab, CursorStyle::Grab),
            Tool::Eraser => (CursorStyle::NotAllowed, CursorStyle::NotAllowed),
            Tool::Line => (CursorStyle::Crosshair, CursorStyle::Crosshair),
            _ => (CursorStyle::Default, CursorStyle::Move),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tool {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tool::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("unknown tool '{}'", s))
    }
}

/// Applies a tool's selection and cursor policy to the scene.
///
/// Only the select tool leaves objects selectable; switching to any other
/// tool clears the active selection.
pub fn apply_tool_policy(scene: &mut Scene, tool: Tool) {
    let selectable = tool == Tool::Select;
    for obj in scene.objects_mut() {
        if is_grid_object(obj) || obj.transient {
            continue;
        }
        obj.selectable = selectable;
    }
    scene.set_selection_enabled(selectable);
    if !selectable {
        scene.discard_active();
    }
    let (default, hover) = tool.cursors();
    scene.set_cursors(default, hover);
}

/// Active tool plus the seat category picked in the toolbar.
#[derive(Debug, Clone, Default)]
pub struct DrawingTools {
    pub active: Tool,
    pub seat_category: Option<String>,
}

impl DrawingTools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill colour and category for a new seat: the picked category, else
    /// the first configured one, else the default seat colour.
    pub fn resolve_seat_style(&self, seats: &SeatSettings) -> (String, Option<String>) {
        let category = self
            .seat_category
            .as_deref()
            .and_then(|id| seats.category(id))
            .or_else(|| seats.categories.first());
        match category {
            Some(c) => (c.color.clone(), Some(c.id.clone())),
            None => (seats.default_color.clone(), None),
        }
    }
}

/// Number for the next seat: existing seat count plus one.
pub fn next_seat_number(scene: &Scene) -> u32 {
    u32::try_from(scene.count_tagged(ObjectTag::Seat))
        .unwrap_or(u32::MAX - 1)
        .saturating_add(1)
}
