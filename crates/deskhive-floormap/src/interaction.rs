//! Pointer input and the per-gesture state machines.
//!
//! The view layer reports input as [`InputEvent`]s in screen coordinates.
//! The editor converts them through the viewport and dispatches on the
//! active tool; the state kept between events lives here.

use serde::{Deserialize, Serialize};

use crate::model::{ObjectId, Point};
use crate::scene::Scene;
use crate::shapes;

/// Input reported by the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InputEvent {
    PointerDown { x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64 },
    /// The view's own selection changed (rubber band, shift-click, ...).
    SelectionChanged { ids: Vec<ObjectId> },
    SelectionCleared,
    DoubleClick { x: f64, y: f64 },
}

/// Multi-click wall drawing.
///
/// The first click sets an anchor and shows a preview segment. Each later
/// click commits a wall from the last anchor and starts a new preview.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    points: Vec<Point>,
    preview: Option<ObjectId>,
    committed: usize,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the first point is placed.
    pub fn is_drawing(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn preview(&self) -> Option<ObjectId> {
        self.preview
    }

    /// Walls committed since drawing started.
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Handles a click. Returns the id of the wall committed by this click.
    ///
    /// A click on the current anchor commits nothing.
    pub fn pointer_down(&mut self, scene: &mut Scene, point: Point) -> Option<ObjectId> {
        let anchor = self.points.last().copied();
        if anchor.is_some_and(|a| a.distance_to(&point) < f64::EPSILON) {
            return None;
        }

        if let Some(preview) = self.preview.take() {
            scene.remove(preview);
        }

        let wall = anchor.map(|from| {
            self.committed += 1;
            scene.add(shapes::wall(from, point))
        });

        self.points.push(point);
        self.preview = Some(scene.add(shapes::wall_preview(point, point)));
        wall
    }

    /// Moves the preview's free end. Returns false when not drawing.
    pub fn pointer_move(&mut self, scene: &mut Scene, point: Point) -> bool {
        let (Some(anchor), Some(id)) = (self.points.last().copied(), self.preview) else {
            return false;
        };
        match scene.get_mut(id) {
            Some(obj) => {
                let mut preview = shapes::wall_preview(anchor, point);
                preview.id = id;
                *obj = preview;
                true
            }
            None => false,
        }
    }

    /// Drops the preview and clears the polyline.
    ///
    /// Returns how many walls were committed.
    pub fn finish(&mut self, scene: &mut Scene) -> usize {
        if let Some(preview) = self.preview.take() {
            scene.remove(preview);
        }
        self.points.clear();
        std::mem::take(&mut self.committed)
    }
}

/// Pointer drag in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// Moving an object with the select tool.
    Moving {
        id: ObjectId,
        origin: Point,
        start_left: f64,
        start_top: f64,
        moved: bool,
    },
    /// Panning the viewport with the hand tool, in screen pixels.
    Panning { last: Point },
}
