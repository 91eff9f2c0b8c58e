use deskhive_floormap::{is_grid_object, FloorMapEditor, ShapeKind};

fn mounted() -> FloorMapEditor {
    let mut editor = FloorMapEditor::with_defaults();
    editor.mount().expect("mount");
    editor
}

fn scene_json(editor: &FloorMapEditor) -> String {
    editor.scene().expect("scene").to_json().expect("serialize")
}

fn user_object_count(editor: &FloorMapEditor) -> usize {
    editor.scene().expect("scene").user_objects().count()
}

#[test]
fn test_fresh_history() {
    let editor = mounted();
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.history().index(), 0);
    assert!(!editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn test_saves_advance_cursor() {
    let mut editor = mounted();
    for _ in 0..5 {
        editor.add_shape(ShapeKind::Circle).expect("add");
    }
    assert_eq!(editor.history().index(), 5);
    assert!(editor.can_undo());
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_then_redo_restores_scene() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_text().expect("add");
    let before = scene_json(&editor);

    assert!(editor.undo().expect("undo"));
    assert_ne!(scene_json(&editor), before);
    assert!(editor.can_redo());

    assert!(editor.redo().expect("redo"));
    assert_eq!(scene_json(&editor), before);
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_everything_leaves_only_grid() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_seat().expect("add");

    editor.undo().expect("undo");
    editor.undo().expect("undo");

    assert_eq!(user_object_count(&editor), 0);
    assert!(!editor.can_undo());
    assert!(editor
        .scene()
        .expect("scene")
        .objects()
        .iter()
        .all(is_grid_object));
}

#[test]
fn test_undo_at_start_is_noop() {
    let mut editor = mounted();
    assert!(!editor.undo().expect("undo"));
    assert!(!editor.redo().expect("redo"));
}

#[test]
fn test_undo_updates_active_floor() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_shape(ShapeKind::Circle).expect("add");
    editor.undo().expect("undo");

    let stored = editor
        .active_floor()
        .and_then(|f| f.canvas_json.clone())
        .expect("snapshot");
    assert_eq!(stored, scene_json(&editor));
}

#[test]
fn test_new_save_discards_redo() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.undo().expect("undo");

    editor.add_text().expect("add");
    assert!(!editor.can_redo());
    assert_eq!(editor.history().len(), 3);
    assert_eq!(editor.history().index(), 2);
}

#[test]
fn test_undo_clears_selection() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_text().expect("add");
    assert!(editor.selected_object().is_some());

    editor.undo().expect("undo");
    assert!(editor.selected_object().is_none());
}
