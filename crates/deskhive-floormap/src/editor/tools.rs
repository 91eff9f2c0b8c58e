//! Tool selection, object creation and property edits.

use deskhive_core::Result;

use super::FloorMapEditor;
use crate::grid::is_grid_object;
use crate::model::{ObjectId, ObjectKind, ObjectTag, SceneObject};
use crate::shapes::{self, ShapeKind};
use crate::tools::{apply_tool_policy, next_seat_number, Tool};

impl FloorMapEditor {
    /// Activates a tool.
    ///
    /// Leaving the line tool mid-draw finishes the polyline first.
    pub fn handle_tool_click(&mut self, tool: Tool) -> Result<()> {
        if self.tools.active == Tool::Line && tool != Tool::Line && self.line.is_drawing() {
            self.finish_line()?;
        }

        self.tools.active = tool;
        self.drag = Default::default();
        if let Some(scene) = self.scene.as_mut() {
            apply_tool_policy(scene, tool);
        }
        if tool != Tool::Select {
            self.set_selected(None);
        }

        tracing::debug!("Tool changed to {}", tool);
        self.publish_tool();
        Ok(())
    }

    /// Activates a tool by toolbar name. Unknown names are logged and ignored.
    pub fn handle_tool_name(&mut self, name: &str) -> Result<bool> {
        match name.parse::<Tool>() {
            Ok(tool) => {
                self.handle_tool_click(tool)?;
                Ok(true)
            }
            Err(e) => {
                tracing::warn!("Ignoring tool click: {}", e);
                Ok(false)
            }
        }
    }

    /// Picks the category used for new seats; `None` falls back to the
    /// first configured category.
    pub fn select_seat_category(&mut self, category: Option<String>) {
        if let Some(id) = category.as_deref() {
            if self.config.seats.category(id).is_none() {
                tracing::warn!("Unknown seat category '{}'", id);
            }
        }
        self.tools.seat_category = category;
    }

    /// Adds, selects, optionally snaps, then saves.
    fn place(&mut self, mut obj: SceneObject, snap: bool) -> Result<Option<ObjectId>> {
        let Some(scene) = self.scene.as_mut() else {
            tracing::debug!("Object placement ignored: no scene mounted");
            return Ok(None);
        };
        obj.selectable = self.tools.active == Tool::Select;
        let id = scene.add(obj);
        scene.set_active(&[id]);
        if snap {
            self.grid.snap_object_to_grid(scene, id);
        }
        self.set_selected(Some(id));
        self.save_history()?;
        Ok(Some(id))
    }

    /// Adds a table at the default spawn.
    pub fn add_shape(&mut self, kind: ShapeKind) -> Result<Option<ObjectId>> {
        self.place(shapes::table(kind), true)
    }

    /// Adds a numbered seat coloured by the current seat category.
    pub fn add_seat(&mut self) -> Result<Option<ObjectId>> {
        let Some(scene) = self.scene.as_ref() else {
            tracing::debug!("add_seat ignored: no scene mounted");
            return Ok(None);
        };
        let number = next_seat_number(scene);
        let (color, category) = self.tools.resolve_seat_style(&self.config.seats);
        let seat = shapes::seat(number, &color, self.config.seats.radius, category);
        self.place(seat, true)
    }

    /// Adds editable text.
    pub fn add_text(&mut self) -> Result<Option<ObjectId>> {
        self.place(shapes::text(), false)
    }

    /// Removes the active selection. Grid dots are never removed.
    ///
    /// Returns the number of objects removed.
    pub fn delete_selected(&mut self) -> Result<usize> {
        let Some(scene) = self.scene.as_mut() else {
            tracing::debug!("delete_selected ignored: no scene mounted");
            return Ok(0);
        };
        let ids: Vec<ObjectId> = scene
            .active_objects()
            .filter(|o| !is_grid_object(o))
            .map(|o| o.id)
            .collect();
        if ids.is_empty() {
            tracing::debug!("delete_selected ignored: nothing selected");
            return Ok(0);
        }

        for id in &ids {
            scene.remove(*id);
        }
        scene.discard_active();
        self.set_selected(None);
        self.save_history()?;
        Ok(ids.len())
    }

    /// Removes every object except the grid.
    pub fn clear_canvas(&mut self) -> Result<()> {
        let Some(scene) = self.scene.as_mut() else {
            tracing::debug!("clear_canvas ignored: no scene mounted");
            return Ok(());
        };
        self.line.finish(scene);
        scene.discard_active();
        scene.retain(is_grid_object);
        self.set_selected(None);
        self.save_history()
    }

    /// Moves an object, snapping it when snapping is on.
    pub fn set_object_position(&mut self, id: ObjectId, left: f64, top: f64) -> Result<bool> {
        let Some(scene) = self.scene.as_mut() else {
            return Ok(false);
        };
        match scene.get_mut(id) {
            Some(obj) if !is_grid_object(obj) => obj.set_position(left, top),
            _ => return Ok(false),
        }
        self.grid.snap_object_to_grid(scene, id);
        self.save_history()?;
        Ok(true)
    }

    /// Reassigns a seat's category and recolours it.
    pub fn set_seat_category(&mut self, id: ObjectId, category_id: &str) -> Result<bool> {
        let Some(color) = self
            .config
            .seats
            .category(category_id)
            .map(|c| c.color.clone())
        else {
            tracing::warn!("Unknown seat category '{}'", category_id);
            return Ok(false);
        };
        let Some(seat) = self.seat_mut(id) else {
            return Ok(false);
        };

        seat.data.category_id = Some(category_id.to_string());
        if let ObjectKind::Group { objects } = &mut seat.kind {
            for child in objects.iter_mut().filter(|c| c.tag().is_none()) {
                child.fill = Some(color.clone());
            }
        }
        self.save_history()?;
        Ok(true)
    }

    /// Marks a seat bookable or not.
    pub fn set_seat_availability(&mut self, id: ObjectId, available: bool) -> Result<bool> {
        let Some(seat) = self.seat_mut(id) else {
            return Ok(false);
        };
        seat.data.available = Some(available);
        self.save_history()?;
        Ok(true)
    }

    fn seat_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.scene
            .as_mut()?
            .get_mut(id)
            .filter(|o| o.has_tag(ObjectTag::Seat))
    }
}
