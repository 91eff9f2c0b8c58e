//! Zoom, pan and grid controls.
//!
//! None of these touch history: the grid is regenerated from settings and
//! the viewport is view state only.

use super::FloorMapEditor;

impl FloorMapEditor {
    /// Changes the grid spacing and redraws the grid.
    pub fn set_grid_size(&mut self, size: f64) {
        if !size.is_finite() || size <= 0.0 {
            tracing::warn!("Ignoring grid size {}", size);
            return;
        }
        self.grid.size = size;
        self.redraw_grid();
    }

    pub fn set_show_grid(&mut self, show: bool) {
        self.grid.show = show;
        self.redraw_grid();
    }

    pub fn set_snap_to_grid(&mut self, snap: bool) {
        self.grid.snap = snap;
    }

    fn redraw_grid(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            self.grid.draw_grid(scene);
        }
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset();
    }
}
