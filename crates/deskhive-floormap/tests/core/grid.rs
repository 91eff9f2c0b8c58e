use deskhive_floormap::{
    ensure_grid_is_on_bottom, is_grid_object, FloorMapEditor, Grid, InputEvent, ObjectTag, Scene,
    ShapeKind,
};

fn mounted() -> FloorMapEditor {
    let mut editor = FloorMapEditor::with_defaults();
    editor.mount().expect("mount");
    editor
}

fn grid_count(editor: &FloorMapEditor) -> usize {
    editor
        .scene()
        .expect("scene")
        .count_tagged(ObjectTag::Grid)
}

fn grid_is_on_bottom(scene: &Scene) -> bool {
    let first_user = scene
        .objects()
        .iter()
        .position(|o| !is_grid_object(o))
        .unwrap_or(scene.len());
    scene.objects()[first_user..].iter().all(|o| !is_grid_object(o))
}

#[test]
fn test_grid_dots_are_inert() {
    let editor = mounted();
    let scene = editor.scene().expect("scene");
    assert_eq!(grid_count(&editor), 41 * 31);
    for dot in scene.objects() {
        assert!(is_grid_object(dot));
        assert!(!dot.selectable);
        assert!(!dot.evented);
        assert_eq!(dot.fill.as_deref(), Some("#cccccc"));
    }
}

#[test]
fn test_delete_and_clear_never_remove_grid() {
    let mut editor = mounted();
    let before = grid_count(&editor);
    let table = editor.add_shape(ShapeKind::Square).expect("add").expect("id");

    let grid_ids: Vec<_> = editor
        .scene()
        .expect("scene")
        .objects()
        .iter()
        .filter(|o| is_grid_object(o))
        .take(3)
        .map(|o| o.id)
        .collect();
    let mut ids = grid_ids.clone();
    ids.push(table);
    editor
        .handle_event(InputEvent::SelectionChanged { ids })
        .expect("select");
    assert_eq!(editor.selected_object(), Some(table));

    assert_eq!(editor.delete_selected().expect("delete"), 1);
    assert_eq!(grid_count(&editor), before);

    editor.add_text().expect("add");
    editor.clear_canvas().expect("clear");
    assert_eq!(grid_count(&editor), before);
    assert_eq!(editor.scene().expect("scene").user_objects().count(), 0);
}

#[test]
fn test_grid_stays_on_bottom() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.set_grid_size(40.0);
    assert!(grid_is_on_bottom(editor.scene().expect("scene")));

    editor.add_seat().expect("add");
    editor.undo().expect("undo");
    editor.redo().expect("redo");
    assert!(grid_is_on_bottom(editor.scene().expect("scene")));
}

#[test]
fn test_ensure_grid_is_on_bottom_is_idempotent() {
    let grid = Grid::default();
    let mut scene = Scene::new(100.0, 100.0, "#fff");
    scene.add(deskhive_floormap::shapes::text());
    grid.draw_grid(&mut scene);
    scene.add(deskhive_floormap::shapes::text());

    ensure_grid_is_on_bottom(&mut scene);
    let once: Vec<_> = scene.objects().iter().map(|o| o.id).collect();
    ensure_grid_is_on_bottom(&mut scene);
    let twice: Vec<_> = scene.objects().iter().map(|o| o.id).collect();

    assert_eq!(once, twice);
    assert!(grid_is_on_bottom(&scene));
}

#[test]
fn test_snap_lands_on_grid_multiples() {
    let mut editor = mounted();
    editor.set_grid_size(25.0);
    let id = editor.add_shape(ShapeKind::Circle).expect("add").expect("id");

    editor.set_object_position(id, 37.0, 62.0).expect("move");
    let obj = editor.scene().expect("scene").get(id).expect("object");
    assert_eq!((obj.left, obj.top), (25.0, 50.0));
}

#[test]
fn test_snap_disabled_keeps_position() {
    let mut editor = mounted();
    editor.set_snap_to_grid(false);
    let id = editor.add_shape(ShapeKind::Square).expect("add").expect("id");

    editor.set_object_position(id, 37.0, 62.0).expect("move");
    let obj = editor.scene().expect("scene").get(id).expect("object");
    assert_eq!((obj.left, obj.top), (37.0, 62.0));
}

#[test]
fn test_grid_toggles_leave_history_alone() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    let len = editor.history().len();

    editor.set_show_grid(false);
    assert_eq!(grid_count(&editor), 0);
    editor.set_show_grid(true);
    editor.set_grid_size(50.0);
    assert_eq!(grid_count(&editor), 17 * 13);

    assert_eq!(editor.history().len(), len);
}

#[test]
fn test_invalid_grid_size_is_ignored() {
    let mut editor = mounted();
    editor.set_grid_size(0.0);
    editor.set_grid_size(f64::NAN);
    assert_eq!(editor.grid().size, 20.0);
}

#[test]
fn test_snapping_a_grid_dot_is_refused() {
    let grid = Grid::default();
    let mut scene = Scene::new(40.0, 40.0, "#fff");
    grid.draw_grid(&mut scene);
    let dot = scene.objects()[0].id;
    assert!(!grid.snap_object_to_grid(&mut scene, dot));
    assert!(!grid.snap_object_to_grid(&mut scene, 9999));
}
