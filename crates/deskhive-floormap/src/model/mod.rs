//! Scene object model.
//!
//! Every visual primitive on a floor is a [`SceneObject`]: a geometry kind,
//! a position, style, interaction flags and a `data` record whose `type`
//! tag tells the editor what the object means (grid dot, table, seat, ...).
//!
//! Positions: `left`/`top` is the top-left corner of the object's bounding
//! box. Line endpoints and group children are stored relative to it, so
//! moving an object only touches `left`/`top`.

mod point;

pub use point::Point;

use serde::{Deserialize, Serialize};

/// Session-local object handle. Not persisted.
pub type ObjectId = u64;

/// Average glyph width as a fraction of the font size, for text extents.
const GLYPH_WIDTH_RATIO: f64 = 0.6;
/// Line height as a fraction of the font size.
const LINE_HEIGHT_RATIO: f64 = 1.2;

/// Semantic discriminator stored in `data.type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectTag {
    Grid,
    Table,
    Seat,
    SeatLabel,
    Text,
    Wall,
}

impl ObjectTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectTag::Grid => "grid",
            ObjectTag::Table => "table",
            ObjectTag::Seat => "seat",
            ObjectTag::SeatLabel => "seat-label",
            ObjectTag::Text => "text",
            ObjectTag::Wall => "wall",
        }
    }
}

/// Semantic payload carried through serialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectData {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<ObjectTag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_number: Option<u32>,
}

impl ObjectData {
    pub fn tagged(tag: ObjectTag) -> Self {
        Self {
            tag: Some(tag),
            ..Self::default()
        }
    }
}

/// Geometry of a scene object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum ObjectKind {
    Rect {
        width: f64,
        height: f64,
    },
    Circle {
        radius: f64,
    },
    /// Endpoints relative to the object's `left`/`top`.
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Text {
        text: String,
        font_size: f64,
        #[serde(default)]
        editable: bool,
    },
    /// Children positioned relative to the group's `left`/`top`.
    Group {
        objects: Vec<SceneObject>,
    },
}

fn yes() -> bool {
    true
}

/// A visual primitive on the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneObject {
    #[serde(skip)]
    pub id: ObjectId,
    #[serde(flatten)]
    pub kind: ObjectKind,
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default = "yes")]
    pub selectable: bool,
    #[serde(default = "yes")]
    pub evented: bool,
    #[serde(default)]
    pub data: ObjectData,
    /// Transient objects (previews) never reach a snapshot.
    #[serde(skip)]
    pub transient: bool,
}

impl SceneObject {
    /// Creates an interactive, untagged object at `left`/`top`.
    pub fn new(kind: ObjectKind, left: f64, top: f64) -> Self {
        Self {
            id: 0,
            kind,
            left,
            top,
            angle: 0.0,
            fill: None,
            stroke: None,
            stroke_width: 0.0,
            selectable: true,
            evented: true,
            data: ObjectData::default(),
            transient: false,
        }
    }

    pub fn with_data(mut self, data: ObjectData) -> Self {
        self.data = data;
        self
    }

    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    /// Makes the object inert: not selectable, not hit by the pointer.
    pub fn inert(mut self) -> Self {
        self.selectable = false;
        self.evented = false;
        self
    }

    pub fn tag(&self) -> Option<ObjectTag> {
        self.data.tag
    }

    pub fn has_tag(&self, tag: ObjectTag) -> bool {
        self.data.tag == Some(tag)
    }

    /// Width and height of the bounding box.
    pub fn size(&self) -> (f64, f64) {
        match &self.kind {
            ObjectKind::Rect { width, height } => (*width, *height),
            ObjectKind::Circle { radius } => (radius * 2.0, radius * 2.0),
            ObjectKind::Line { x1, y1, x2, y2 } => ((x2 - x1).abs(), (y2 - y1).abs()),
            ObjectKind::Text {
                text, font_size, ..
            } => text_extent(text, *font_size),
            ObjectKind::Group { objects } => {
                let (_, _, max_x, max_y) = union_bounds(objects).unwrap_or((0.0, 0.0, 0.0, 0.0));
                (max_x, max_y)
            }
        }
    }

    /// Absolute bounding box as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let (w, h) = self.size();
        (self.left, self.top, self.left + w, self.top + h)
    }

    /// Absolute endpoints of a line object.
    pub fn line_endpoints(&self) -> Option<(Point, Point)> {
        match self.kind {
            ObjectKind::Line { x1, y1, x2, y2 } => Some((
                Point::new(self.left + x1, self.top + y1),
                Point::new(self.left + x2, self.top + y2),
            )),
            _ => None,
        }
    }

    /// Hit test against the object's outline or area.
    pub fn contains_point(&self, point: &Point, tolerance: f64) -> bool {
        match &self.kind {
            ObjectKind::Circle { radius } => {
                let center = Point::new(self.left + radius, self.top + radius);
                center.distance_to(point) <= radius + tolerance
            }
            ObjectKind::Line { .. } => match self.line_endpoints() {
                Some((a, b)) => {
                    point.distance_to_segment(&a, &b) <= (self.stroke_width / 2.0).max(tolerance)
                }
                None => false,
            },
            _ => {
                let (x1, y1, x2, y2) = self.bounds();
                point.x >= x1 - tolerance
                    && point.x <= x2 + tolerance
                    && point.y >= y1 - tolerance
                    && point.y <= y2 + tolerance
            }
        }
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.top += dy;
    }

    pub fn set_position(&mut self, left: f64, top: f64) {
        self.left = left;
        self.top = top;
    }
}

/// Approximate rendered extent of single-line text.
pub fn text_extent(text: &str, font_size: f64) -> (f64, f64) {
    let chars = text.chars().count().max(1) as f64;
    (chars * font_size * GLYPH_WIDTH_RATIO, font_size * LINE_HEIGHT_RATIO)
}

fn union_bounds(objects: &[SceneObject]) -> Option<(f64, f64, f64, f64)> {
    objects.iter().map(SceneObject::bounds).reduce(|a, b| {
        (a.0.min(b.0), a.1.min(b.1), a.2.max(b.2), a.3.max(b.3))
    })
}
