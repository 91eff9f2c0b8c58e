use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use deskhive_core::{
    EditorEvent, EventCategory, EventFilter, Floor, FloorEvent, FloorId, FloorPlan,
    NotificationLevel,
};
use deskhive_floormap::{EditorConfig, FloorMapEditor, InputEvent, ObjectTag, ShapeKind};

fn mounted() -> FloorMapEditor {
    let mut editor = FloorMapEditor::with_defaults();
    editor.mount().expect("mount");
    editor
}

fn active_id(editor: &FloorMapEditor) -> FloorId {
    editor.active_floor().expect("active floor").id.clone()
}

fn tags(editor: &FloorMapEditor) -> Vec<ObjectTag> {
    editor
        .scene()
        .expect("scene")
        .user_objects()
        .filter_map(|o| o.tag())
        .collect()
}

#[test]
fn test_add_floor_levels_and_names() {
    let mut editor = mounted();
    let second = editor.add_floor().expect("add").expect("mounted");

    assert_eq!(editor.floors().len(), 2);
    assert_eq!(active_id(&editor), second);
    let floor = editor.active_floor().expect("floor");
    assert_eq!(floor.level, 2);
    assert_eq!(floor.name, "Floor 2");
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_switch_round_trip_restores_objects() {
    let mut editor = mounted();
    let a = active_id(&editor);
    editor.add_shape(ShapeKind::Square).expect("add");
    editor.add_seat().expect("add");

    let b = editor.add_floor().expect("add").expect("mounted");
    assert!(tags(&editor).is_empty());
    editor.add_text().expect("add");

    assert!(editor.switch_floor(&a).expect("switch"));
    assert_eq!(tags(&editor), vec![ObjectTag::Table, ObjectTag::Seat]);
    assert!(!editor.can_undo());

    assert!(editor.switch_floor(&b).expect("switch"));
    assert_eq!(tags(&editor), vec![ObjectTag::Text]);
}

#[test]
fn test_switch_persists_unsaved_changes() {
    let mut editor = mounted();
    let a = active_id(&editor);
    let b = editor.add_floor().expect("add").expect("mounted");
    editor.switch_floor(&a).expect("switch");
    editor.add_shape(ShapeKind::Square).expect("add");

    // Drag without releasing, so nothing is saved before the switch.
    editor
        .handle_event(InputEvent::PointerDown { x: 110.0, y: 110.0 })
        .expect("down");
    editor
        .handle_event(InputEvent::PointerMove { x: 210.0, y: 210.0 })
        .expect("move");
    editor.switch_floor(&b).expect("switch");
    editor.switch_floor(&a).expect("switch");

    let table = editor
        .scene()
        .expect("scene")
        .user_objects()
        .next()
        .expect("table");
    assert_eq!((table.left, table.top), (200.0, 200.0));
}

#[test]
fn test_switch_to_active_floor_is_noop() {
    let mut editor = mounted();
    let a = active_id(&editor);
    assert!(!editor.switch_floor(&a).expect("switch"));
}

#[test]
fn test_switch_to_unknown_floor_fails() {
    let mut editor = mounted();
    let err = editor.switch_floor(&FloorId::from("missing")).unwrap_err();
    assert!(err.is_floor_error());
}

#[test]
fn test_delete_active_floor_moves_to_first() {
    let mut editor = mounted();
    let a = active_id(&editor);
    editor.add_shape(ShapeKind::Square).expect("add");
    let b = editor.add_floor().expect("add").expect("mounted");
    editor.add_text().expect("add");

    editor.delete_floor(&b).expect("delete");
    assert_eq!(editor.floors().len(), 1);
    assert_eq!(active_id(&editor), a);
    assert_eq!(tags(&editor), vec![ObjectTag::Table]);
}

#[test]
fn test_delete_inactive_floor_keeps_scene() {
    let mut editor = mounted();
    let a = active_id(&editor);
    let b = editor.add_floor().expect("add").expect("mounted");
    editor.add_text().expect("add");

    editor.delete_floor(&a).expect("delete");
    assert_eq!(active_id(&editor), b);
    assert_eq!(tags(&editor), vec![ObjectTag::Text]);
}

#[test]
fn test_delete_last_floor_leaves_empty_plan() {
    let mut editor = mounted();
    let a = active_id(&editor);
    editor.add_shape(ShapeKind::Square).expect("add");

    editor.delete_floor(&a).expect("delete");
    assert!(editor.floors().is_empty());
    assert!(editor.active_floor().is_none());
    assert!(tags(&editor).is_empty());
    assert!(!editor.scene().expect("scene").is_empty());

    let fresh = editor.add_floor().expect("add").expect("mounted");
    assert_eq!(active_id(&editor), fresh);
    assert_eq!(editor.active_floor().expect("floor").level, 1);
}

#[test]
fn test_delete_unknown_floor_fails() {
    let mut editor = mounted();
    assert!(editor.delete_floor(&FloorId::from("missing")).is_err());
    assert_eq!(editor.floors().len(), 1);
}

#[test]
fn test_rename_floor() {
    let mut editor = FloorMapEditor::with_defaults();
    let a = active_id(&editor);
    editor.rename_floor(&a, "Lobby").expect("rename");
    assert_eq!(editor.active_floor().expect("floor").name, "Lobby");

    assert!(editor.rename_floor(&FloorId::from("x"), "Roof").is_err());
}

#[test]
fn test_change_listener_sees_every_mutation() {
    let mut editor = mounted();
    let calls = Arc::new(AtomicUsize::new(0));
    let last_floor_count = Arc::new(AtomicUsize::new(0));

    let c = calls.clone();
    let n = last_floor_count.clone();
    editor.on_change(move |plan| {
        c.fetch_add(1, Ordering::SeqCst);
        n.store(plan.floors.len(), Ordering::SeqCst);
    });

    editor.add_shape(ShapeKind::Square).expect("add");
    editor.undo().expect("undo");
    editor.add_floor().expect("add");
    let a = editor.floors()[0].id.clone();
    editor.rename_floor(&a, "Ground").expect("rename");

    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(last_floor_count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_floor_events() {
    let mut editor = mounted();
    let a = active_id(&editor);
    let toasts = Arc::new(Mutex::new(Vec::new()));
    let switches = Arc::new(Mutex::new(Vec::new()));

    let t = toasts.clone();
    editor.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Notification]),
        move |event| {
            if let EditorEvent::Notification(n) = event {
                t.lock().expect("lock").push((n.level, n.message));
            }
        },
    );
    let s = switches.clone();
    editor.events().subscribe(
        EventFilter::Categories(vec![EventCategory::Floor]),
        move |event| {
            if let EditorEvent::Floor(FloorEvent::Switched { from, to }) = event {
                s.lock().expect("lock").push((from, to));
            }
        },
    );

    let b = editor.add_floor().expect("add").expect("mounted");

    let toasts = toasts.lock().expect("lock");
    assert_eq!(
        toasts.as_slice(),
        &[(NotificationLevel::Success, "Floor added".to_string())]
    );
    let switches = switches.lock().expect("lock");
    assert_eq!(switches.as_slice(), &[(Some(a), b)]);
}

#[test]
fn test_floor_operations_need_a_scene() {
    let mut editor = FloorMapEditor::with_defaults();
    assert!(editor.add_floor().expect("add").is_none());
    assert_eq!(editor.floors().len(), 1);
}

#[test]
fn test_delete_active_floor_keeps_state_when_fallback_is_broken() {
    let mut plan = FloorPlan::new();
    let mut ground = Floor::new(1);
    ground.canvas_json = Some("{oops".to_string());
    plan.push(ground);
    let upstairs = plan.push(Floor::new(2));
    plan.active_floor_id = Some(upstairs.clone());

    let mut editor = FloorMapEditor::new(EditorConfig::default(), Some(plan));
    editor.mount().expect("mount");
    editor.add_text().expect("add");

    let calls = Arc::new(AtomicUsize::new(0));
    let c = calls.clone();
    editor.on_change(move |_| {
        c.fetch_add(1, Ordering::SeqCst);
    });

    assert!(editor.delete_floor(&upstairs).is_err());
    assert_eq!(editor.floors().len(), 2);
    assert_eq!(active_id(&editor), upstairs);
    assert_eq!(tags(&editor), vec![ObjectTag::Text]);
    assert!(editor.can_undo());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
