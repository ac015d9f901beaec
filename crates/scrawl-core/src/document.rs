//! The element arena and its in-place update operation.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::SketchBackend;
use crate::elements::{Element, ElementId, ElementKind, Text, create_element};

/// Defects in document manipulation. These indicate a caller bug, not a
/// user-facing condition; the editor logs and drops them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("no element with id {0}")]
    UnknownElement(ElementId),
    #[error("update does not match the kind of element {0}")]
    UpdateMismatch(ElementId),
}

/// How to rewrite one element in place.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementUpdate {
    /// New extent for a line or rectangle; the drawable is rebuilt.
    Reshape { start: Point, end: Point },
    /// One more sampled point for a pencil stroke.
    AppendPoint(Point),
    /// New text content; the bounding corner is re-measured.
    SetText(String),
}

/// Append-only collection of elements, keyed by insertion index.
///
/// An element's id always equals its position: elements are never removed
/// or reordered, only appended or replaced in place, and replacement
/// keeps the id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id the next appended element will get.
    pub fn next_id(&self) -> ElementId {
        self.elements.len()
    }

    /// Append `element`, which must carry [`Document::next_id`] as its id.
    pub fn push(&mut self, element: Element) -> ElementId {
        debug_assert_eq!(element.id(), self.elements.len());
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    /// First element hit at `point`, scanning in ascending id order.
    ///
    /// Lowest id wins: an element drawn earlier occludes later ones for
    /// hit purposes even though it is painted underneath them.
    pub fn element_at(&self, point: Point) -> Option<&Element> {
        self.elements
            .iter()
            .find(|element| element.hit_position(point).is_some())
    }

    /// Rewrite `elements[id]` in place, dispatching on the stored kind.
    ///
    /// Reshapes rebuild the drawable through the factory, pencil points
    /// append, and text commits re-measure the bounding corner from the
    /// stored anchor.
    pub fn update_element(
        &mut self,
        id: ElementId,
        update: ElementUpdate,
        backend: &mut dyn SketchBackend,
    ) -> Result<(), DocumentError> {
        let element = self
            .elements
            .get(id)
            .ok_or(DocumentError::UnknownElement(id))?;
        let replacement = match (element, update) {
            (Element::Line(_), ElementUpdate::Reshape { start, end }) => {
                create_element(id, start, end, ElementKind::Line, backend)
            }
            (Element::Rectangle(_), ElementUpdate::Reshape { start, end }) => {
                create_element(id, start, end, ElementKind::Rectangle, backend)
            }
            (Element::Pencil(pencil), ElementUpdate::AppendPoint(point)) => {
                let mut stroke = pencil.clone();
                stroke.push_point(point);
                Element::Pencil(stroke)
            }
            (Element::Text(text), ElementUpdate::SetText(content)) => {
                let metrics = backend.measure_text(&content);
                let corner = Point::new(
                    text.anchor.x + metrics.width,
                    text.anchor.y + metrics.height,
                );
                Element::Text(Text::with_content(id, text.anchor, corner, content))
            }
            _ => return Err(DocumentError::UpdateMismatch(id)),
        };
        self.elements[id] = replacement;
        Ok(())
    }
}
