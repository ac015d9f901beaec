//! Axis-aligned rectangle element.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::ElementId;
use crate::backend::Sketch;
use crate::geometry::{self, HitPosition};

/// A rectangle spanned by two opposite corners.
///
/// Corners are stored raw, in drag order: `start` may lie right of or
/// below `end`, and nothing here normalizes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// Corner the drag started from.
    pub start: Point,
    /// Opposite corner.
    pub end: Point,
    /// Drawable for the current corners. Rebuilt on every reshape.
    #[serde(skip)]
    pub sketch: Sketch,
}

impl Rectangle {
    pub fn new(id: ElementId, start: Point, end: Point, sketch: Sketch) -> Self {
        Self {
            id,
            start,
            end,
            sketch,
        }
    }

    /// Corner grabs win over containment, scanned clockwise from the
    /// drag origin.
    pub fn hit_position(&self, point: Point) -> Option<HitPosition> {
        let top_right = Point::new(self.end.x, self.start.y);
        let bottom_left = Point::new(self.start.x, self.end.y);
        if geometry::near_point(point, self.start) {
            Some(HitPosition::TopLeft)
        } else if geometry::near_point(point, top_right) {
            Some(HitPosition::TopRight)
        } else if geometry::near_point(point, bottom_left) {
            Some(HitPosition::BottomLeft)
        } else if geometry::near_point(point, self.end) {
            Some(HitPosition::BottomRight)
        } else if self.contains(point) {
            Some(HitPosition::Inside)
        } else {
            None
        }
    }

    /// Inclusive containment against the raw corners. Empty whenever the
    /// drag ran leftward or upward, since `start` must be the lesser
    /// corner for any point to satisfy both comparisons.
    fn contains(&self, point: Point) -> bool {
        point.x >= self.start.x
            && point.x <= self.end.x
            && point.y >= self.start.y
            && point.y <= self.end.y
    }
}
