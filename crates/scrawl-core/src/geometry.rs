//! Pure hit-testing primitives shared by every element variant.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Grab slop around endpoints and corners, in logical units.
///
/// Applied per axis, so the pick region is a square, not a disc.
pub const POINT_TOLERANCE: f64 = 5.0;

/// Slack allowed by [`on_segment`] when hit-testing a line body.
pub const SEGMENT_SLACK: f64 = 1.0;

/// Slack allowed by [`on_segment`] for freehand strokes, which get a much
/// wider margin than a single line.
pub const STROKE_SLACK: f64 = 5.0;

/// Where a hit landed on an element.
///
/// Corner labels are nominal: a rectangle dragged right-to-left keeps its
/// `TopLeft` label on the drag origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitPosition {
    /// A line's first endpoint.
    Start,
    /// A line's second endpoint.
    End,
    /// The corner a rectangle drag started from.
    TopLeft,
    /// The corner horizontally opposite the drag origin.
    TopRight,
    /// The corner vertically opposite the drag origin.
    BottomLeft,
    /// The corner the drag ended on.
    BottomRight,
    /// Anywhere on the element's body.
    Inside,
}

/// Euclidean distance between two logical points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Whether `p` lies within [`POINT_TOLERANCE`] of `target` on both axes
/// independently.
pub fn near_point(p: Point, target: Point) -> bool {
    (p.x - target.x).abs() < POINT_TOLERANCE && (p.y - target.y).abs() < POINT_TOLERANCE
}

/// Whether `p` lies on the segment from `start` to `end`, within `slack`.
///
/// Triangle-inequality form: the summed distance from `p` to both
/// endpoints may exceed the segment length by less than `slack`. Robust
/// to floating error; not a perpendicular-distance test, so the tolerance
/// band narrows toward the endpoints.
pub fn on_segment(start: Point, end: Point, p: Point, slack: f64) -> bool {
    distance(start, p) + distance(end, p) - distance(start, end) < slack
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_near_point_square_region() {
        let target = Point::new(10.0, 10.0);
        // Both axes just inside the tolerance: a radial test would miss
        // this point (offset ~6.9), the per-axis test hits it.
        assert!(near_point(Point::new(14.9, 14.9), target));
        assert!(near_point(target, target));
        // One axis at the boundary misses; the comparison is strict.
        assert!(!near_point(Point::new(15.0, 10.0), target));
        assert!(!near_point(Point::new(10.0, 15.0), target));
    }

    #[test]
    fn test_on_segment_hits_midpoint() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(on_segment(a, b, Point::new(5.0, 0.0), SEGMENT_SLACK));
        assert!(on_segment(a, b, a, SEGMENT_SLACK));
    }

    #[test]
    fn test_on_segment_slack_band() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        // One unit off at the midpoint: summed distance ~10.198, inside
        // the default slack.
        assert!(on_segment(a, b, Point::new(5.0, 1.0), SEGMENT_SLACK));
        // Three units off: summed distance ~11.66, outside.
        assert!(!on_segment(a, b, Point::new(5.0, 3.0), SEGMENT_SLACK));
        // A wider slack admits it.
        assert!(on_segment(a, b, Point::new(5.0, 3.0), STROKE_SLACK));
    }

    #[test]
    fn test_on_segment_rejects_beyond_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(10.0, 0.0);
        assert!(!on_segment(a, b, Point::new(12.0, 0.0), SEGMENT_SLACK));
        assert!(!on_segment(a, b, Point::new(-2.0, 0.0), SEGMENT_SLACK));
    }
}
