use deskhive_core::{Floor, FloorPlan, SceneError};
use deskhive_floormap::{shapes, ObjectKind, ObjectTag, Point, Scene, SceneDocument, ShapeKind};

fn sample_scene() -> Scene {
    let mut scene = Scene::new(800.0, 600.0, "#f3f4f6");
    scene.add(shapes::grid_dot(Point::new(0.0, 0.0), 1.0, "#cccccc"));
    scene.add(shapes::table(ShapeKind::Square));
    scene.add(shapes::seat(1, "#3b82f6", 15.0, Some("standard".to_string())));
    scene.add(shapes::wall(Point::new(20.0, 40.0), Point::new(120.0, 40.0)));
    scene
}

#[test]
fn test_snapshot_wire_shape() {
    let json = sample_scene().to_json().expect("serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("json");

    assert_eq!(value["version"], "1.0");
    assert_eq!(value["background"], "#f3f4f6");
    let objects = value["objects"].as_array().expect("objects");
    assert_eq!(objects.len(), 3);

    assert_eq!(objects[0]["kind"], "rect");
    assert_eq!(objects[0]["data"]["type"], "table");
    assert_eq!(objects[0]["strokeWidth"], 2.0);

    assert_eq!(objects[1]["kind"], "group");
    assert_eq!(objects[1]["data"]["type"], "seat");
    assert_eq!(objects[1]["data"]["seatNumber"], 1);
    assert_eq!(objects[1]["data"]["categoryId"], "standard");
    assert_eq!(objects[1]["data"]["available"], true);

    assert_eq!(objects[2]["kind"], "line");
    assert_eq!(objects[2]["data"]["type"], "wall");
    assert!(objects[2].get("id").is_none());
}

#[test]
fn test_snapshot_reload_preserves_objects() {
    let scene = sample_scene();
    let json = scene.to_json().expect("serialize");

    let mut restored = Scene::new(800.0, 600.0, "#ffffff");
    restored.load_json(&json).expect("load");

    assert_eq!(restored.background(), "#f3f4f6");
    assert_eq!(restored.count_tagged(ObjectTag::Grid), 0);
    assert_eq!(restored.count_tagged(ObjectTag::Seat), 1);
    assert_eq!(restored.to_json().expect("serialize"), json);

    let wall = restored
        .objects()
        .iter()
        .find_map(|o| o.line_endpoints())
        .expect("wall");
    assert_eq!(wall, (Point::new(20.0, 40.0), Point::new(120.0, 40.0)));
}

#[test]
fn test_seat_group_children_survive() {
    let json = sample_scene().to_json().expect("serialize");
    let doc = SceneDocument::from_json(&json).expect("parse");
    let seat = doc
        .objects
        .iter()
        .find(|o| o.has_tag(ObjectTag::Seat))
        .expect("seat");

    match &seat.kind {
        ObjectKind::Group { objects } => {
            assert_eq!(objects.len(), 2);
            assert!(objects[1].has_tag(ObjectTag::SeatLabel));
            match &objects[1].kind {
                ObjectKind::Text { text, .. } => assert_eq!(text, "1"),
                other => panic!("unexpected label {:?}", other),
            }
        }
        other => panic!("unexpected seat {:?}", other),
    }
}

#[test]
fn test_malformed_snapshot_is_rejected() {
    let err = SceneDocument::from_json("{not json").unwrap_err();
    assert!(err.is_scene_error());

    let err = SceneDocument::from_json(r#"{"version":"1.0","objects":[{"kind":"blob"}]}"#)
        .unwrap_err();
    assert!(err.is_scene_error());
}

#[test]
fn test_failed_load_leaves_scene_untouched() {
    let mut scene = sample_scene();
    let before = scene.to_json().expect("serialize");
    assert!(scene.load_json("[1, 2").is_err());
    assert_eq!(scene.to_json().expect("serialize"), before);
}

#[test]
fn test_unknown_version_is_rejected() {
    let err = SceneDocument::from_json(r##"{"version":"0.9","background":"#fff","objects":[]}"##)
        .unwrap_err();
    assert!(matches!(
        err,
        deskhive_core::Error::Scene(SceneError::UnsupportedVersion { .. })
    ));
}

#[test]
fn test_floor_plan_wire_shape() {
    let mut plan = FloorPlan::new();
    let mut floor = Floor::new(3);
    floor.canvas_json = Some(sample_scene().to_json().expect("serialize"));
    let id = plan.push(floor);
    plan.active_floor_id = Some(id.clone());

    let value = serde_json::to_value(&plan).expect("serialize");
    assert_eq!(value["activeFloorId"], id.as_str());
    assert_eq!(value["floors"][0]["name"], "Floor 3");
    assert_eq!(value["floors"][0]["level"], 3);
    assert!(value["floors"][0]["canvasJson"].is_string());

    let back: FloorPlan = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, plan);
}

#[test]
fn test_floor_defaults_when_fields_missing() {
    let plan: FloorPlan =
        serde_json::from_str(r#"{"floors":[{"id":"f1","name":"Lobby"}]}"#).expect("parse");
    let floor = &plan.floors[0];
    assert_eq!(floor.level, 1);
    assert!(floor.scene_json().is_none());
    assert!(plan.active_floor_id.is_none());
}
