//! # DeskHive Floor Map
//!
//! Headless floor-map editor for DeskHive workspaces. A view layer (web
//! canvas, native GUI, test harness) feeds it input events and renders the
//! scene; the editor owns everything else.
//!
//! ## Core Components
//!
//! - **Scene**: Ordered objects (tables, seats, text, walls, grid dots) on a
//!   fixed-size surface, with selection and cursor state
//! - **Grid**: Dot grid drawing and snapping
//! - **History**: Linear snapshot undo/redo per floor
//! - **Floors**: Multi-floor plans with a single active floor
//! - **Tools**: Select, hand, eraser, wall line, tables, seats and text
//! - **Interaction**: Pointer gestures (wall drawing, drag-move, pan)
//! - **Serialization**: Scene snapshots and floor-map files
//!
//! ## Architecture
//!
//! ```text
//! FloorMapEditor
//!   ├── Scene (objects, selection, cursors)
//!   │     └── Grid (regenerated, never persisted)
//!   ├── FloorPlan (floors, active floor, stored snapshots)
//!   ├── SnapshotHistory (undo/redo for the active floor)
//!   ├── DrawingTools + LineTool + DragState
//!   ├── Viewport (screen <-> scene)
//!   └── EventBus (plan changes, history, tool, selection, toasts)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use deskhive_floormap::{FloorMapEditor, InputEvent, ShapeKind, Tool};
//!
//! let mut editor = FloorMapEditor::with_defaults();
//! editor.on_change(|plan| println!("{} floors", plan.floors.len()));
//! editor.mount()?;
//!
//! editor.add_shape(ShapeKind::Square)?;
//! editor.handle_tool_click(Tool::Line)?;
//! editor.handle_event(InputEvent::PointerDown { x: 20.0, y: 20.0 })?;
//! editor.handle_event(InputEvent::PointerDown { x: 200.0, y: 20.0 })?;
//! editor.handle_tool_click(Tool::Select)?;
//! ```

pub mod editor;
pub mod floors;
pub mod grid;
pub mod history;
pub mod interaction;
pub mod model;
pub mod scene;
pub mod serialization;
pub mod shapes;
pub mod tools;
pub mod viewport;

pub use editor::{EditorConfig, FloorMapEditor};
pub use floors::FloorSession;
pub use grid::{ensure_grid_is_on_bottom, is_grid_object, Grid};
pub use history::SnapshotHistory;
pub use interaction::{DragState, InputEvent, LineTool};
pub use model::{ObjectData, ObjectId, ObjectKind, ObjectTag, Point, SceneObject};
pub use scene::{CursorStyle, Scene};
pub use serialization::{FloorMapFile, FloorMapMetadata, SceneDocument};
pub use shapes::ShapeKind;
pub use tools::{DrawingTools, Tool};
pub use viewport::Viewport;
