//! Dot grid drawing and snapping.
//!
//! The grid is regenerated from settings and never persisted: grid dots are
//! dropped from every snapshot and redrawn whenever the grid changes.

use deskhive_settings::GridSettings;

use crate::model::{ObjectId, ObjectTag, Point, SceneObject};
use crate::scene::Scene;
use crate::shapes;

/// Returns true if `obj` is a grid dot.
pub fn is_grid_object(obj: &SceneObject) -> bool {
    obj.has_tag(ObjectTag::Grid)
}

/// Moves every grid dot below every other object.
///
/// Idempotent. Relative order within both groups is preserved.
pub fn ensure_grid_is_on_bottom(scene: &mut Scene) {
    scene.partition_to_bottom(is_grid_object);
}

/// Grid parameters used by the editor.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    pub size: f64,
    pub show: bool,
    pub snap: bool,
    pub dot_radius: f64,
    pub dot_color: String,
}

impl Default for Grid {
    fn default() -> Self {
        Self::from(&GridSettings::default())
    }
}

impl From<&GridSettings> for Grid {
    fn from(settings: &GridSettings) -> Self {
        Self {
            size: settings.size,
            show: settings.show,
            snap: settings.snap,
            dot_radius: settings.dot_radius,
            dot_color: settings.dot_color.clone(),
        }
    }
}

impl Grid {
    fn usable_size(&self) -> Option<f64> {
        (self.size.is_finite() && self.size > 0.0).then_some(self.size)
    }

    /// Removes the existing grid and redraws it if the grid is shown.
    ///
    /// Returns the number of dots drawn.
    pub fn draw_grid(&self, scene: &mut Scene) -> usize {
        scene.retain(|o| !is_grid_object(o));

        if !self.show {
            return 0;
        }
        let Some(size) = self.usable_size() else {
            tracing::debug!("Grid size {} is not drawable", self.size);
            return 0;
        };
        if scene.width() < 0.0 || scene.height() < 0.0 {
            return 0;
        }

        let columns = (scene.width() / size).floor() as usize;
        let rows = (scene.height() / size).floor() as usize;

        let mut dots = Vec::with_capacity((columns + 1) * (rows + 1));
        for i in 0..=columns {
            for j in 0..=rows {
                let center = Point::new(i as f64 * size, j as f64 * size);
                dots.push(shapes::grid_dot(center, self.dot_radius, &self.dot_color));
            }
        }

        let count = dots.len();
        scene.insert_at_bottom(dots);
        tracing::debug!("Drew {} grid dots at spacing {}", count, size);
        count
    }

    fn snap_value(&self, value: f64, size: f64) -> f64 {
        (value / size).round() * size
    }

    /// Rounds a free point to the grid when snapping is on.
    pub fn snap_point(&self, point: Point) -> Point {
        match self.usable_size() {
            Some(size) if self.snap => {
                Point::new(self.snap_value(point.x, size), self.snap_value(point.y, size))
            }
            _ => point,
        }
    }

    /// Snaps an object's `left`/`top` to the grid.
    ///
    /// Returns false when snapping is off, the object is missing, or the
    /// object is a grid dot.
    pub fn snap_object_to_grid(&self, scene: &mut Scene, id: ObjectId) -> bool {
        if !self.snap {
            return false;
        }
        let Some(size) = self.usable_size() else {
            return false;
        };
        let Some(obj) = scene.get_mut(id) else {
            return false;
        };
        if is_grid_object(obj) {
            return false;
        }
        let left = self.snap_value(obj.left, size);
        let top = self.snap_value(obj.top, size);
        obj.set_position(left, top);
        true
    }
}
