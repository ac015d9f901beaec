//! Element definitions for the sketch canvas.

mod line;
mod pencil;
mod rectangle;
mod text;

pub use line::Line;
pub use pencil::Pencil;
pub use rectangle::Rectangle;
pub use text::Text;

use kurbo::Point;
use serde::{Deserialize, Serialize};

use crate::backend::SketchBackend;
use crate::geometry::HitPosition;

/// Unique identifier for elements: the element's index in its document.
pub type ElementId = usize;

/// The shape kinds an element can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Line,
    Rectangle,
    Pencil,
    Text,
}

/// One placed shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Pencil(Pencil),
    Text(Text),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(e) => e.id,
            Element::Rectangle(e) => e.id,
            Element::Pencil(e) => e.id,
            Element::Text(e) => e.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Pencil(_) => ElementKind::Pencil,
            Element::Text(_) => ElementKind::Text,
        }
    }

    /// Where `point` (logical space) lands on this element, if anywhere.
    pub fn hit_position(&self, point: Point) -> Option<HitPosition> {
        match self {
            Element::Line(e) => e.hit_position(point),
            Element::Rectangle(e) => e.hit_position(point),
            Element::Pencil(e) => e.hit_position(point),
            Element::Text(e) => e.hit_position(point),
        }
    }
}

/// Build a zero-or-larger element of `kind` spanning `start` to `end`.
///
/// Line and rectangle drawables come from the backend, built from the raw
/// corner coordinates; corners are never normalized, so a rectangle's
/// width and height may be negative. Pencil seeds a single-point stroke,
/// text an empty run.
pub fn create_element(
    id: ElementId,
    start: Point,
    end: Point,
    kind: ElementKind,
    backend: &mut dyn SketchBackend,
) -> Element {
    match kind {
        ElementKind::Line => {
            let sketch = backend.line_sketch(start, end);
            Element::Line(Line::new(id, start, end, sketch))
        }
        ElementKind::Rectangle => {
            let sketch = backend.rect_sketch(start, end.x - start.x, end.y - start.y);
            Element::Rectangle(Rectangle::new(id, start, end, sketch))
        }
        ElementKind::Pencil => Element::Pencil(Pencil::new(id, start)),
        ElementKind::Text => Element::Text(Text::new(id, start, end)),
    }
}
