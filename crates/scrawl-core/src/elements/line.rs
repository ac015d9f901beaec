//! Straight line element.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::ElementId;
use crate::backend::Sketch;
use crate::geometry::{self, HitPosition, SEGMENT_SLACK};

/// A straight line between two logical points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    /// Endpoint the drag started from.
    pub start: Point,
    /// Endpoint the drag ended on.
    pub end: Point,
    /// Drawable for the current endpoints. Rebuilt on every reshape.
    #[serde(skip)]
    pub sketch: Sketch,
}

impl Line {
    pub fn new(id: ElementId, start: Point, end: Point, sketch: Sketch) -> Self {
        Self {
            id,
            start,
            end,
            sketch,
        }
    }

    /// Endpoint grabs win over the segment body.
    pub fn hit_position(&self, point: Point) -> Option<HitPosition> {
        if geometry::near_point(point, self.start) {
            Some(HitPosition::Start)
        } else if geometry::near_point(point, self.end) {
            Some(HitPosition::End)
        } else if geometry::on_segment(self.start, self.end, point, SEGMENT_SLACK) {
            Some(HitPosition::Inside)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> Line {
        Line::new(
            0,
            Point::new(0.0, 0.0),
            Point::new(100.0, 0.0),
            Sketch::default(),
        )
    }

    #[test]
    fn test_endpoints_beat_body() {
        let line = line();
        assert_eq!(
            line.hit_position(Point::new(2.0, 2.0)),
            Some(HitPosition::Start)
        );
        assert_eq!(
            line.hit_position(Point::new(98.0, -2.0)),
            Some(HitPosition::End)
        );
    }

    #[test]
    fn test_body_hit() {
        let line = line();
        assert_eq!(
            line.hit_position(Point::new(50.0, 0.0)),
            Some(HitPosition::Inside)
        );
    }

    #[test]
    fn test_miss() {
        let line = line();
        assert_eq!(line.hit_position(Point::new(50.0, 30.0)), None);
        assert_eq!(line.hit_position(Point::new(150.0, 0.0)), None);
    }
}
