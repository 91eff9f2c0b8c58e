//! Builders for the objects the floor-map tools place on a scene.
//!
//! Each builder returns a detached [`SceneObject`]; the caller adds it to
//! the scene, which assigns the object id.

use crate::model::{text_extent, ObjectData, ObjectKind, ObjectTag, Point, SceneObject};

/// Spawn position for tables and free text.
pub const DEFAULT_SPAWN: Point = Point { x: 100.0, y: 100.0 };
/// Spawn position for seats.
pub const SEAT_SPAWN: Point = Point { x: 150.0, y: 150.0 };

pub const TABLE_FILL: &str = "#e2e8f0";
pub const TABLE_STROKE: &str = "#64748b";
pub const TABLE_STROKE_WIDTH: f64 = 2.0;
pub const SQUARE_SIDE: f64 = 60.0;
pub const ROUND_TABLE_RADIUS: f64 = 30.0;

pub const SEAT_STROKE: &str = "#1e293b";
pub const SEAT_LABEL_COLOR: &str = "#ffffff";
pub const SEAT_LABEL_SIZE: f64 = 12.0;

pub const TEXT_DEFAULT: &str = "Text";
pub const TEXT_SIZE: f64 = 16.0;
pub const TEXT_COLOR: &str = "#111827";

pub const WALL_COLOR: &str = "#374151";
pub const WALL_WIDTH: f64 = 4.0;
pub const WALL_PREVIEW_COLOR: &str = "#9ca3af";

/// Table outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "square" => Ok(ShapeKind::Square),
            "circle" => Ok(ShapeKind::Circle),
            other => Err(format!("unknown shape '{}'", other)),
        }
    }
}

/// A table: a 60x60 square or a radius-30 circle at the default spawn.
pub fn table(kind: ShapeKind) -> SceneObject {
    let geometry = match kind {
        ShapeKind::Square => ObjectKind::Rect {
            width: SQUARE_SIDE,
            height: SQUARE_SIDE,
        },
        ShapeKind::Circle => ObjectKind::Circle {
            radius: ROUND_TABLE_RADIUS,
        },
    };
    SceneObject::new(geometry, DEFAULT_SPAWN.x, DEFAULT_SPAWN.y)
        .with_fill(TABLE_FILL)
        .with_stroke(TABLE_STROKE, TABLE_STROKE_WIDTH)
        .with_data(ObjectData::tagged(ObjectTag::Table))
}

/// A seat: a filled circle with its number centred on it, grouped.
pub fn seat(number: u32, color: &str, radius: f64, category_id: Option<String>) -> SceneObject {
    let circle = SceneObject::new(ObjectKind::Circle { radius }, 0.0, 0.0)
        .with_fill(color)
        .with_stroke(SEAT_STROKE, 1.0);

    let label_text = number.to_string();
    let (label_w, label_h) = text_extent(&label_text, SEAT_LABEL_SIZE);
    let label = SceneObject::new(
        ObjectKind::Text {
            text: label_text,
            font_size: SEAT_LABEL_SIZE,
            editable: false,
        },
        radius - label_w / 2.0,
        radius - label_h / 2.0,
    )
    .with_fill(SEAT_LABEL_COLOR)
    .with_data(ObjectData::tagged(ObjectTag::SeatLabel));

    SceneObject::new(
        ObjectKind::Group {
            objects: vec![circle, label],
        },
        SEAT_SPAWN.x,
        SEAT_SPAWN.y,
    )
    .with_data(ObjectData {
        tag: Some(ObjectTag::Seat),
        available: Some(true),
        category_id,
        seat_number: Some(number),
    })
}

/// Editable free text.
pub fn text() -> SceneObject {
    SceneObject::new(
        ObjectKind::Text {
            text: TEXT_DEFAULT.to_string(),
            font_size: TEXT_SIZE,
            editable: true,
        },
        DEFAULT_SPAWN.x,
        DEFAULT_SPAWN.y,
    )
    .with_fill(TEXT_COLOR)
    .with_data(ObjectData::tagged(ObjectTag::Text))
}

fn segment(from: Point, to: Point) -> SceneObject {
    let left = from.x.min(to.x);
    let top = from.y.min(to.y);
    SceneObject::new(
        ObjectKind::Line {
            x1: from.x - left,
            y1: from.y - top,
            x2: to.x - left,
            y2: to.y - top,
        },
        left,
        top,
    )
}

/// A committed wall segment.
pub fn wall(from: Point, to: Point) -> SceneObject {
    segment(from, to)
        .with_stroke(WALL_COLOR, WALL_WIDTH)
        .with_data(ObjectData::tagged(ObjectTag::Wall))
}

/// The rubber-band segment that follows the pointer while drawing walls.
pub fn wall_preview(from: Point, to: Point) -> SceneObject {
    let mut preview = segment(from, to)
        .with_stroke(WALL_PREVIEW_COLOR, WALL_WIDTH)
        .inert();
    preview.transient = true;
    preview
}

/// A single grid dot centred on `center`.
pub fn grid_dot(center: Point, radius: f64, color: &str) -> SceneObject {
    SceneObject::new(
        ObjectKind::Circle { radius },
        center.x - radius,
        center.y - radius,
    )
    .with_fill(color)
    .with_data(ObjectData::tagged(ObjectTag::Grid))
    .inert()
}
