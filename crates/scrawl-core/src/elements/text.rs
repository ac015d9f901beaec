//! Text element.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::ElementId;
use crate::geometry::HitPosition;

/// A text run anchored at its top-left corner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Text {
    pub(crate) id: ElementId,
    /// Top-left corner, logical space.
    pub anchor: Point,
    /// Bottom-right corner: the anchor plus the measured extent of
    /// `content`. Degenerate until the first commit measures the run.
    pub corner: Point,
    /// The run's content. Empty until the overlay commits.
    pub content: String,
}

impl Text {
    /// Seed an empty run spanning the given corners.
    pub fn new(id: ElementId, anchor: Point, corner: Point) -> Self {
        Self {
            id,
            anchor,
            corner,
            content: String::new(),
        }
    }

    /// Build a run with measured corners and final content.
    pub fn with_content(id: ElementId, anchor: Point, corner: Point, content: String) -> Self {
        Self {
            id,
            anchor,
            corner,
            content,
        }
    }

    /// Inclusive containment in the anchor/corner box.
    pub fn hit_position(&self, point: Point) -> Option<HitPosition> {
        let inside = point.x >= self.anchor.x
            && point.x <= self.corner.x
            && point.y >= self.anchor.y
            && point.y <= self.corner.y;
        inside.then_some(HitPosition::Inside)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_hit() {
        let text = Text::with_content(
            0,
            Point::new(5.0, 5.0),
            Point::new(53.0, 29.0),
            "hi".to_string(),
        );
        assert_eq!(
            text.hit_position(Point::new(20.0, 20.0)),
            Some(HitPosition::Inside)
        );
        assert_eq!(text.hit_position(Point::new(5.0, 5.0)), Some(HitPosition::Inside));
        assert_eq!(text.hit_position(Point::new(60.0, 20.0)), None);
    }

    #[test]
    fn test_empty_run_is_degenerate() {
        let text = Text::new(0, Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        assert_eq!(
            text.hit_position(Point::new(5.0, 5.0)),
            Some(HitPosition::Inside)
        );
        assert_eq!(text.hit_position(Point::new(6.0, 5.0)), None);
    }
}
