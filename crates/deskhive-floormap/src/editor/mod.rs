//! Floor-map editor state and the operations the view layer calls.
//!
//! This module is split into submodules for better organization:
//! - `history`: Save, undo and redo
//! - `floors`: Add, switch, delete and rename floors
//! - `tools`: Tool selection, object creation and property edits
//! - `input`: Pointer and selection events
//! - `viewport`: Zoom, pan and grid controls
//! - `file_io`: Floor-map export and import

mod file_io;
mod floors;
mod history;
mod input;
mod tools;
mod viewport;

use deskhive_core::{
    EditorEvent, EventBus, EventCategory, EventFilter, Floor, FloorEvent, FloorPlan,
    NotificationEvent, Result, SelectionEvent, SubscriptionId, ToolEvent,
};
use deskhive_settings::{CanvasSettings, Config, SeatSettings};

use crate::grid::{ensure_grid_is_on_bottom, is_grid_object, Grid};
use crate::history::SnapshotHistory;
use crate::interaction::{DragState, LineTool};
use crate::model::ObjectId;
use crate::scene::Scene;
use crate::serialization::SceneDocument;
use crate::tools::{apply_tool_policy, DrawingTools, Tool};
use crate::viewport::Viewport;

/// Editor settings taken from the user configuration.
#[derive(Debug, Clone, Default)]
pub struct EditorConfig {
    pub canvas: CanvasSettings,
    pub grid: Grid,
    pub seats: SeatSettings,
    pub history_limit: Option<usize>,
}

impl From<&Config> for EditorConfig {
    fn from(config: &Config) -> Self {
        Self {
            canvas: config.canvas.clone(),
            grid: Grid::from(&config.grid),
            seats: config.seats.clone(),
            history_limit: config.history.limit,
        }
    }
}

/// Floor-map editor.
///
/// Owns the scene while mounted, the floor plan, per-floor undo history,
/// tool and gesture state, and an event bus the view layer subscribes to.
/// Every operation is a silent no-op while no scene is mounted.
#[derive(Debug)]
pub struct FloorMapEditor {
    pub(crate) config: EditorConfig,
    pub(crate) grid: Grid,
    pub(crate) scene: Option<Scene>,
    pub(crate) plan: FloorPlan,
    pub(crate) history: SnapshotHistory,
    pub(crate) tools: DrawingTools,
    pub(crate) line: LineTool,
    pub(crate) drag: DragState,
    pub(crate) viewport: Viewport,
    pub(crate) selected_object: Option<ObjectId>,
    events: EventBus,
}

impl FloorMapEditor {
    /// Creates an editor seeded with `plan`. An empty seed gets "Floor 1".
    pub fn new(config: EditorConfig, seed: Option<FloorPlan>) -> Self {
        let mut plan = seed.unwrap_or_default();
        if plan.is_empty() {
            plan.push(Floor::new(1));
        }
        plan.normalize_active();

        Self {
            grid: config.grid.clone(),
            scene: None,
            plan,
            history: SnapshotHistory::with_limit(config.history_limit),
            tools: DrawingTools::new(),
            line: LineTool::new(),
            drag: DragState::Idle,
            viewport: Viewport::new(config.canvas.width, config.canvas.height),
            selected_object: None,
            events: EventBus::new(),
            config,
        }
    }

    /// Editor with default settings and an empty seed.
    pub fn with_defaults() -> Self {
        Self::new(EditorConfig::default(), None)
    }

    /// Creates the scene, draws the grid and loads the active floor.
    ///
    /// If the active floor's snapshot is malformed the editor stays
    /// unmounted and the error is returned.
    pub fn mount(&mut self) -> Result<()> {
        if self.scene.is_some() {
            return Ok(());
        }

        let canvas = &self.config.canvas;
        let mut scene = Scene::new(canvas.width, canvas.height, canvas.background.clone());
        self.grid.draw_grid(&mut scene);
        self.viewport = Viewport::new(canvas.width, canvas.height);
        self.scene = Some(scene);

        if let Err(e) = self.load_active_floor() {
            self.scene = None;
            return Err(e);
        }

        tracing::info!(
            "Floor-map editor mounted ({} floors, active {:?})",
            self.plan.len(),
            self.plan.active_floor().map(|f| f.name.as_str())
        );
        self.publish_history();
        Ok(())
    }

    /// Disposes the scene and all gesture state.
    pub fn unmount(&mut self) {
        if self.scene.take().is_some() {
            tracing::info!("Floor-map editor unmounted");
        }
        self.line = LineTool::new();
        self.drag = DragState::Idle;
        self.selected_object = None;
        self.history = SnapshotHistory::with_limit(self.config.history_limit);
    }

    pub fn is_mounted(&self) -> bool {
        self.scene.is_some()
    }

    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_ref()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.plan
    }

    /// Floors in insertion order.
    pub fn floors(&self) -> &[Floor] {
        &self.plan.floors
    }

    pub fn active_floor(&self) -> Option<&Floor> {
        self.plan.active_floor()
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn active_tool(&self) -> Tool {
        self.tools.active
    }

    pub fn seat_category(&self) -> Option<&str> {
        self.tools.seat_category.as_deref()
    }

    pub fn selected_object(&self) -> Option<ObjectId> {
        self.selected_object
    }

    pub fn is_drawing_line(&self) -> bool {
        self.line.is_drawing()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn events(&self) -> &EventBus {
        &self.events
    }

    /// Calls `handler` with the full floor plan after every persisted change.
    pub fn on_change<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&FloorPlan) + Send + Sync + 'static,
    {
        self.events.subscribe(
            EventFilter::Categories(vec![EventCategory::Floor]),
            move |event| {
                if let EditorEvent::Floor(FloorEvent::PlanChanged { plan }) = event {
                    handler(&plan);
                }
            },
        )
    }

    /// Replaces the scene contents with the active floor's snapshot and
    /// starts a fresh history.
    pub(crate) fn load_active_floor(&mut self) -> Result<()> {
        let Some(scene) = self.scene.as_mut() else {
            return Ok(());
        };

        let document = self
            .plan
            .active_floor()
            .and_then(Floor::scene_json)
            .map(SceneDocument::from_json)
            .transpose()?;

        scene.discard_active();
        scene.retain(is_grid_object);
        if let Some(document) = document {
            scene.replace_with(document);
        }
        ensure_grid_is_on_bottom(scene);
        apply_tool_policy(scene, self.tools.active);
        self.history.init_history(scene)?;
        Ok(())
    }

    /// Ends in-flight gestures. Committed walls and unreleased moves are
    /// saved as their own history entry.
    pub(crate) fn settle_gestures(&mut self) -> Result<()> {
        self.finish_line()?;
        if let DragState::Moving { id, moved: true, .. } = std::mem::take(&mut self.drag) {
            tracing::debug!("Saving unreleased move of object {}", id);
            self.save_history()?;
        }
        Ok(())
    }

    /// Drops in-flight gestures without recording anything.
    pub(crate) fn reset_gestures(&mut self) {
        if let Some(scene) = self.scene.as_mut() {
            self.line.finish(scene);
        } else {
            self.line = LineTool::new();
        }
        self.drag = DragState::Idle;
    }

    pub(crate) fn set_selected(&mut self, id: Option<ObjectId>) {
        if self.selected_object != id {
            self.selected_object = id;
            self.events
                .publish(EditorEvent::Selection(SelectionEvent { object: id }));
        }
    }

    pub(crate) fn notify_plan_changed(&self) {
        self.events.publish(EditorEvent::Floor(FloorEvent::PlanChanged {
            plan: self.plan.clone(),
        }));
    }

    pub(crate) fn publish_history(&self) {
        self.events
            .publish(EditorEvent::History(self.history.status()));
    }

    pub(crate) fn publish_tool(&self) {
        let cursor = self
            .scene
            .as_ref()
            .map_or_else(|| self.tools.active.cursors().0, Scene::default_cursor);
        self.events.publish(EditorEvent::Tool(ToolEvent {
            tool: self.tools.active.to_string(),
            cursor: cursor.to_string(),
        }));
    }

    pub(crate) fn toast(&self, notification: NotificationEvent) {
        self.events.publish(EditorEvent::Notification(notification));
    }
}

impl Default for FloorMapEditor {
    fn default() -> Self {
        Self::with_defaults()
    }
}
