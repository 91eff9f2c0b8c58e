//! Scene type definitions: CursorStyle.

use std::fmt;

/// Cursor the view layer shows over the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorStyle {
    #[default]
    Default,
    Move,
    Grab,
    NotAllowed,
    Crosshair,
}

impl CursorStyle {
    /// CSS cursor keyword.
    pub fn as_css(&self) -> &'static str {
        match self {
            CursorStyle::Default => "default",
            CursorStyle::Move => "move",
            CursorStyle::Grab => "grab",
            CursorStyle::NotAllowed => "not-allowed",
            CursorStyle::Crosshair => "crosshair",
        }
    }
}

impl fmt::Display for CursorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}
