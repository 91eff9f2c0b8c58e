//! The scene: an ordered collection of objects on a fixed-size surface.
//!
//! Objects are kept in z-order, bottom first. The scene also tracks the
//! active selection and the cursors the view layer should display, and it
//! owns (de)serialization of its objects to the snapshot format.

mod types;

pub use types::CursorStyle;

use deskhive_core::Result;

use crate::model::{ObjectId, ObjectTag, Point, SceneObject};
use crate::serialization::SceneDocument;

/// Pointer slack in scene units when hit-testing thin objects.
pub const HIT_TOLERANCE: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct Scene {
    width: f64,
    height: f64,
    background: String,
    objects: Vec<SceneObject>,
    next_id: ObjectId,
    active: Vec<ObjectId>,
    selection_enabled: bool,
    default_cursor: CursorStyle,
    hover_cursor: CursorStyle,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new(width: f64, height: f64, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            background: background.into(),
            objects: Vec::new(),
            next_id: 1,
            active: Vec::new(),
            selection_enabled: true,
            default_cursor: CursorStyle::Default,
            hover_cursor: CursorStyle::Move,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn background(&self) -> &str {
        &self.background
    }

    pub fn set_background(&mut self, background: impl Into<String>) {
        self.background = background.into();
    }

    /// Number of objects, grid included.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Objects in z-order, bottom first.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> impl Iterator<Item = &mut SceneObject> {
        self.objects.iter_mut()
    }

    /// Objects that are not grid dots, in z-order.
    pub fn user_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(|o| !o.has_tag(ObjectTag::Grid))
    }

    /// Number of top-level objects carrying `tag`.
    pub fn count_tagged(&self, tag: ObjectTag) -> usize {
        self.objects.iter().filter(|o| o.has_tag(tag)).count()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.id == id)
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    fn assign_id(&mut self, obj: &mut SceneObject) -> ObjectId {
        let id = self.next_id;
        self.next_id += 1;
        obj.id = id;
        id
    }

    /// Adds an object on top and returns its id.
    pub fn add(&mut self, mut obj: SceneObject) -> ObjectId {
        let id = self.assign_id(&mut obj);
        self.objects.push(obj);
        id
    }

    /// Inserts objects below everything else, keeping their order.
    pub fn insert_at_bottom(&mut self, objects: Vec<SceneObject>) -> Vec<ObjectId> {
        let mut ids = Vec::with_capacity(objects.len());
        let mut batch = Vec::with_capacity(objects.len());
        for mut obj in objects {
            ids.push(self.assign_id(&mut obj));
            batch.push(obj);
        }
        self.objects.splice(0..0, batch);
        ids
    }

    /// Removes an object, dropping it from the active selection as well.
    pub fn remove(&mut self, id: ObjectId) -> Option<SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        self.active.retain(|a| *a != id);
        Some(self.objects.remove(index))
    }

    /// Keeps only the objects matching `keep`.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: Fn(&SceneObject) -> bool,
    {
        self.objects.retain(|o| keep(o));
        let objects = &self.objects;
        self.active.retain(|id| objects.iter().any(|o| o.id == *id));
    }

    /// Moves an object below every other object.
    pub fn send_to_back(&mut self, id: ObjectId) -> bool {
        match self.objects.iter().position(|o| o.id == id) {
            Some(index) => {
                let obj = self.objects.remove(index);
                self.objects.insert(0, obj);
                true
            }
            None => false,
        }
    }

    /// Stable partition: objects matching `bottom` first, the rest after.
    pub fn partition_to_bottom<F>(&mut self, bottom: F)
    where
        F: Fn(&SceneObject) -> bool,
    {
        let (mut lower, upper): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.objects).into_iter().partition(|o| bottom(o));
        lower.extend(upper);
        self.objects = lower;
    }

    /// Selects the given objects, ignoring unknown ids.
    pub fn set_active(&mut self, ids: &[ObjectId]) {
        self.active = ids.iter().copied().filter(|id| self.contains(*id)).collect();
    }

    /// Ids of the actively selected objects.
    pub fn active_ids(&self) -> &[ObjectId] {
        &self.active
    }

    pub fn active_objects(&self) -> impl Iterator<Item = &SceneObject> {
        self.active.iter().filter_map(|id| self.get(*id))
    }

    pub fn discard_active(&mut self) {
        self.active.clear();
    }

    pub fn selection_enabled(&self) -> bool {
        self.selection_enabled
    }

    /// Toggles drag-to-select on the whole scene.
    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.selection_enabled = enabled;
    }

    pub fn default_cursor(&self) -> CursorStyle {
        self.default_cursor
    }

    pub fn hover_cursor(&self) -> CursorStyle {
        self.hover_cursor
    }

    pub fn set_cursors(&mut self, default: CursorStyle, hover: CursorStyle) {
        self.default_cursor = default;
        self.hover_cursor = hover;
    }

    /// Topmost evented, non-grid object under `point`.
    pub fn topmost_at(&self, point: &Point) -> Option<ObjectId> {
        self.objects
            .iter()
            .rev()
            .filter(|o| o.evented && !o.has_tag(ObjectTag::Grid))
            .find(|o| o.contains_point(point, HIT_TOLERANCE))
            .map(|o| o.id)
    }

    /// Serializes the scene into the snapshot format.
    ///
    /// Grid dots and transient objects are left out.
    pub fn to_json(&self) -> Result<String> {
        SceneDocument::from_scene(self).to_json()
    }

    /// Loads a snapshot, replacing every non-grid object.
    ///
    /// The snapshot is parsed before the scene is touched, so a malformed
    /// snapshot leaves the scene unchanged.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let document = SceneDocument::from_json(json)?;
        self.replace_with(document);
        Ok(())
    }

    /// Replaces every non-grid object with the document's objects.
    pub fn replace_with(&mut self, document: SceneDocument) {
        self.retain(|o| o.has_tag(ObjectTag::Grid));
        self.background = document.background;
        for obj in document.objects {
            self.add(obj);
        }
    }
}
