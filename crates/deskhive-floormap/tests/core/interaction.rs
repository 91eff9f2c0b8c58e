use deskhive_floormap::{FloorMapEditor, InputEvent, ObjectTag, Point, ShapeKind, Tool};

fn mounted() -> FloorMapEditor {
    let mut editor = FloorMapEditor::with_defaults();
    editor.mount().expect("mount");
    editor
}

fn down(editor: &mut FloorMapEditor, x: f64, y: f64) {
    editor
        .handle_event(InputEvent::PointerDown { x, y })
        .expect("pointer down");
}

fn drag_to(editor: &mut FloorMapEditor, x: f64, y: f64) {
    editor
        .handle_event(InputEvent::PointerMove { x, y })
        .expect("pointer move");
}

fn up(editor: &mut FloorMapEditor, x: f64, y: f64) {
    editor
        .handle_event(InputEvent::PointerUp { x, y })
        .expect("pointer up");
}

fn transient_count(editor: &FloorMapEditor) -> usize {
    editor
        .scene()
        .expect("scene")
        .objects()
        .iter()
        .filter(|o| o.transient)
        .count()
}

#[test]
fn test_polyline_then_select_leaves_two_walls() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");

    down(&mut editor, 20.0, 20.0);
    down(&mut editor, 200.0, 20.0);
    down(&mut editor, 200.0, 200.0);
    assert!(editor.is_drawing_line());
    assert_eq!(transient_count(&editor), 1);

    editor.handle_tool_click(Tool::Select).expect("tool");
    let scene = editor.scene().expect("scene");
    assert_eq!(scene.count_tagged(ObjectTag::Wall), 2);
    assert_eq!(transient_count(&editor), 0);
    assert!(!editor.is_drawing_line());
    assert_eq!(editor.history().index(), 1);

    let walls: Vec<_> = scene
        .user_objects()
        .filter_map(|o| o.line_endpoints())
        .collect();
    assert_eq!(
        walls,
        vec![
            (Point::new(20.0, 20.0), Point::new(200.0, 20.0)),
            (Point::new(200.0, 20.0), Point::new(200.0, 200.0)),
        ]
    );
}

#[test]
fn test_wall_points_snap_to_grid() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");
    down(&mut editor, 23.0, 18.0);
    down(&mut editor, 97.0, 22.0);
    editor.finish_line().expect("finish");

    let wall = editor
        .scene()
        .expect("scene")
        .user_objects()
        .next()
        .and_then(|o| o.line_endpoints())
        .expect("wall");
    assert_eq!(wall, (Point::new(20.0, 20.0), Point::new(100.0, 20.0)));
}

#[test]
fn test_preview_follows_pointer() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");
    down(&mut editor, 40.0, 40.0);
    drag_to(&mut editor, 120.0, 60.0);

    let scene = editor.scene().expect("scene");
    let preview = scene
        .objects()
        .iter()
        .find(|o| o.transient)
        .and_then(|o| o.line_endpoints())
        .expect("preview");
    assert_eq!(preview, (Point::new(40.0, 40.0), Point::new(120.0, 60.0)));
    assert_eq!(scene.count_tagged(ObjectTag::Wall), 0);
}

#[test]
fn test_finish_without_walls_does_not_save() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");
    down(&mut editor, 40.0, 40.0);
    editor.finish_line().expect("finish");

    assert!(!editor.is_drawing_line());
    assert_eq!(transient_count(&editor), 0);
    assert_eq!(editor.history().index(), 0);
    assert_eq!(editor.active_tool(), Tool::Line);
}

#[test]
fn test_double_click_keeps_drawing() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");
    down(&mut editor, 40.0, 40.0);
    down(&mut editor, 80.0, 40.0);
    editor
        .handle_event(InputEvent::DoubleClick { x: 80.0, y: 40.0 })
        .expect("double click");

    assert!(editor.is_drawing_line());
    assert_eq!(
        editor.scene().expect("scene").count_tagged(ObjectTag::Wall),
        1
    );
}

#[test]
fn test_eraser_removes_and_saves() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    let index = editor.history().index();

    editor.handle_tool_click(Tool::Eraser).expect("tool");
    down(&mut editor, 130.0, 130.0);

    assert_eq!(editor.scene().expect("scene").user_objects().count(), 0);
    assert_eq!(editor.history().index(), index + 1);
    assert!(editor.undo().expect("undo"));
    assert_eq!(editor.scene().expect("scene").user_objects().count(), 1);
}

#[test]
fn test_eraser_ignores_grid() {
    let mut editor = mounted();
    let before = editor.scene().expect("scene").len();
    editor.handle_tool_click(Tool::Eraser).expect("tool");
    down(&mut editor, 0.0, 0.0);

    assert_eq!(editor.scene().expect("scene").len(), before);
    assert_eq!(editor.history().index(), 0);
}

#[test]
fn test_drag_moves_with_snap_and_saves_on_release() {
    let mut editor = mounted();
    let id = editor.add_shape(ShapeKind::Square).expect("add").expect("id");
    editor
        .handle_event(InputEvent::SelectionCleared)
        .expect("clear");

    down(&mut editor, 110.0, 110.0);
    assert_eq!(editor.selected_object(), Some(id));
    drag_to(&mut editor, 152.0, 131.0);
    let index = editor.history().index();
    up(&mut editor, 152.0, 131.0);

    let obj = editor.scene().expect("scene").get(id).expect("object");
    assert_eq!((obj.left, obj.top), (140.0, 120.0));
    assert_eq!(editor.history().index(), index + 1);
}

#[test]
fn test_click_without_move_does_not_save() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    let index = editor.history().index();

    down(&mut editor, 110.0, 110.0);
    up(&mut editor, 110.0, 110.0);
    assert_eq!(editor.history().index(), index);
}

#[test]
fn test_click_on_empty_space_clears_selection() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    assert!(editor.selected_object().is_some());

    down(&mut editor, 500.0, 500.0);
    assert!(editor.selected_object().is_none());
    assert!(editor.scene().expect("scene").active_ids().is_empty());
}

#[test]
fn test_hand_pans_viewport() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Hand).expect("tool");
    down(&mut editor, 10.0, 10.0);
    drag_to(&mut editor, 40.0, 25.0);
    drag_to(&mut editor, 50.0, 35.0);
    up(&mut editor, 50.0, 35.0);

    assert_eq!(editor.viewport().pan_x(), 40.0);
    assert_eq!(editor.viewport().pan_y(), 25.0);
    assert_eq!(editor.history().index(), 0);
}

#[test]
fn test_panned_clicks_map_to_scene() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.handle_tool_click(Tool::Hand).expect("tool");
    down(&mut editor, 0.0, 0.0);
    drag_to(&mut editor, 100.0, 100.0);
    up(&mut editor, 100.0, 100.0);

    editor.handle_tool_click(Tool::Eraser).expect("tool");
    // Screen (230, 230) is scene (130, 130), inside the table.
    down(&mut editor, 230.0, 230.0);
    assert_eq!(editor.scene().expect("scene").user_objects().count(), 0);
}

#[test]
fn test_selection_events_from_view() {
    let mut editor = mounted();
    let a = editor.add_shape(ShapeKind::Square).expect("add").expect("id");
    let b = editor.add_text().expect("add").expect("id");

    editor
        .handle_event(InputEvent::SelectionChanged { ids: vec![b, a] })
        .expect("select");
    assert_eq!(editor.selected_object(), Some(b));
    assert_eq!(editor.scene().expect("scene").active_ids(), &[b, a]);

    editor
        .handle_event(InputEvent::SelectionCleared)
        .expect("clear");
    assert!(editor.selected_object().is_none());
}

#[test]
fn test_undo_mid_polyline_keeps_walls_as_one_step() {
    let mut editor = mounted();
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.handle_tool_click(Tool::Line).expect("tool");

    down(&mut editor, 20.0, 20.0);
    down(&mut editor, 200.0, 20.0);
    down(&mut editor, 200.0, 200.0);
    assert!(editor.undo().expect("undo"));

    let scene = editor.scene().expect("scene");
    assert_eq!(scene.count_tagged(ObjectTag::Wall), 0);
    assert_eq!(scene.count_tagged(ObjectTag::Table), 1);
    assert_eq!(transient_count(&editor), 0);
    assert!(!editor.is_drawing_line());

    assert!(editor.redo().expect("redo"));
    let scene = editor.scene().expect("scene");
    assert_eq!(scene.count_tagged(ObjectTag::Wall), 2);
    assert_eq!(scene.count_tagged(ObjectTag::Table), 1);
}

#[test]
fn test_walls_become_selectable_with_select_tool() {
    let mut editor = mounted();
    editor.handle_tool_click(Tool::Line).expect("tool");
    down(&mut editor, 20.0, 20.0);
    down(&mut editor, 200.0, 20.0);

    let wall_selectable = |editor: &FloorMapEditor| -> Vec<bool> {
        editor
            .scene()
            .expect("scene")
            .user_objects()
            .filter(|o| o.has_tag(ObjectTag::Wall))
            .map(|o| o.selectable)
            .collect()
    };
    assert_eq!(wall_selectable(&editor), vec![false]);

    editor.handle_tool_click(Tool::Select).expect("tool");
    assert_eq!(wall_selectable(&editor), vec![true]);
}
