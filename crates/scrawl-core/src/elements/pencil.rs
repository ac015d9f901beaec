//! Freehand pencil stroke.

use kurbo::Point;
use serde::{Deserialize, Serialize};

use super::ElementId;
use crate::geometry::{self, HitPosition, STROKE_SLACK};

/// A freehand stroke: the pointer samples in draw order.
///
/// Points are append-only while the stroke is live; the fillable outline
/// is derived by the rendering backend at paint time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pencil {
    pub(crate) id: ElementId,
    /// Sampled points, logical space.
    pub points: Vec<Point>,
}

impl Pencil {
    /// Seed a stroke with its first sampled point.
    pub fn new(id: ElementId, first: Point) -> Self {
        Self {
            id,
            points: vec![first],
        }
    }

    /// Append one sample.
    pub fn push_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of samples in the stroke.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A stroke is hit anywhere along its sampled segments; a single
    /// seeded point has no segment and cannot be hit.
    pub fn hit_position(&self, point: Point) -> Option<HitPosition> {
        self.points
            .windows(2)
            .any(|pair| geometry::on_segment(pair[0], pair[1], point, STROKE_SLACK))
            .then_some(HitPosition::Inside)
    }
}
