//! Pointer and selection input.

use deskhive_core::Result;

use super::FloorMapEditor;
use crate::grid::is_grid_object;
use crate::interaction::{DragState, InputEvent};
use crate::model::{ObjectId, Point};
use crate::tools::Tool;

impl FloorMapEditor {
    /// Single entry point for view-layer input.
    pub fn handle_event(&mut self, event: InputEvent) -> Result<()> {
        if self.scene.is_none() {
            tracing::debug!("Input ignored: no scene mounted");
            return Ok(());
        }

        match event {
            InputEvent::PointerDown { x, y } => self.pointer_down(x, y),
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(x, y);
                Ok(())
            }
            InputEvent::PointerUp { .. } => self.pointer_up(),
            InputEvent::SelectionChanged { ids } => {
                self.selection_changed(&ids);
                Ok(())
            }
            InputEvent::SelectionCleared => {
                if let Some(scene) = self.scene.as_mut() {
                    scene.discard_active();
                }
                self.set_selected(None);
                Ok(())
            }
            InputEvent::DoubleClick { .. } => Ok(()),
        }
    }

    /// Ends the polyline, keeping committed walls.
    ///
    /// History is saved only if at least one wall was committed.
    pub fn finish_line(&mut self) -> Result<()> {
        let Some(scene) = self.scene.as_mut() else {
            return Ok(());
        };
        let committed = self.line.finish(scene);
        if committed > 0 {
            tracing::debug!("Finished line with {} walls", committed);
            self.save_history()?;
        }
        Ok(())
    }

    fn pointer_down(&mut self, x: f64, y: f64) -> Result<()> {
        let point = self.viewport.pixel_to_world(x, y);
        match self.tools.active {
            Tool::Eraser => self.erase_at(point),
            Tool::Line => {
                let point = self.grid.snap_point(point);
                if let Some(scene) = self.scene.as_mut() {
                    let wall = self
                        .line
                        .pointer_down(scene, point)
                        .and_then(|id| scene.get_mut(id));
                    if let Some(wall) = wall {
                        wall.selectable = false;
                    }
                }
                Ok(())
            }
            Tool::Select => {
                self.select_at(point);
                Ok(())
            }
            Tool::Hand => {
                self.drag = DragState::Panning {
                    last: Point::new(x, y),
                };
                Ok(())
            }
            Tool::Shape | Tool::Seat | Tool::Text => Ok(()),
        }
    }

    fn erase_at(&mut self, point: Point) -> Result<()> {
        let Some(scene) = self.scene.as_mut() else {
            return Ok(());
        };
        let Some(id) = scene.topmost_at(&point) else {
            return Ok(());
        };
        scene.remove(id);
        if self.selected_object == Some(id) {
            self.set_selected(None);
        }
        tracing::debug!("Erased object {}", id);
        self.save_history()
    }

    fn select_at(&mut self, point: Point) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        let hit = scene
            .topmost_at(&point)
            .and_then(|id| scene.get(id))
            .filter(|o| o.selectable)
            .map(|o| (o.id, o.left, o.top));

        match hit {
            Some((id, left, top)) => {
                scene.set_active(&[id]);
                self.drag = DragState::Moving {
                    id,
                    origin: point,
                    start_left: left,
                    start_top: top,
                    moved: false,
                };
                self.set_selected(Some(id));
            }
            None => {
                scene.discard_active();
                self.set_selected(None);
            }
        }
    }

    fn pointer_move(&mut self, x: f64, y: f64) {
        let point = self.viewport.pixel_to_world(x, y);

        if self.tools.active == Tool::Line {
            let point = self.grid.snap_point(point);
            if let Some(scene) = self.scene.as_mut() {
                self.line.pointer_move(scene, point);
            }
            return;
        }

        let drag = self.drag;
        match drag {
            DragState::Moving {
                id,
                origin,
                start_left,
                start_top,
                moved,
            } => {
                let target = self.grid.snap_point(Point::new(
                    start_left + point.x - origin.x,
                    start_top + point.y - origin.y,
                ));
                let Some(obj) = self.scene.as_mut().and_then(|s| s.get_mut(id)) else {
                    self.drag = DragState::Idle;
                    return;
                };
                obj.set_position(target.x, target.y);
                let moved = moved || target.x != start_left || target.y != start_top;
                self.drag = DragState::Moving {
                    id,
                    origin,
                    start_left,
                    start_top,
                    moved,
                };
            }
            DragState::Panning { last } => {
                self.viewport.pan_by(x - last.x, y - last.y);
                self.drag = DragState::Panning {
                    last: Point::new(x, y),
                };
            }
            DragState::Idle => {}
        }
    }

    fn pointer_up(&mut self) -> Result<()> {
        let drag = std::mem::take(&mut self.drag);
        if let DragState::Moving { id, moved: true, .. } = drag {
            tracing::debug!("Moved object {}", id);
            self.save_history()?;
        }
        Ok(())
    }

    fn selection_changed(&mut self, ids: &[ObjectId]) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };
        scene.set_active(ids);
        let first = scene
            .active_objects()
            .find(|o| !is_grid_object(o))
            .map(|o| o.id);
        self.set_selected(first);
    }
}
