//! Line entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// A line defined by two endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Common entity data
    pub common: EntityCommon,
    /// Start point
    pub start: Vector2,
    /// End point
    pub end: Vector2,
}

impl Line {
    /// Create a new degenerate line at the origin
    pub fn new() -> Self {
        Line {
            common: EntityCommon::new(),
            start: Vector2::ZERO,
            end: Vector2::ZERO,
        }
    }

    /// Create a new line between two points
    pub fn from_points(start: Vector2, end: Vector2) -> Self {
        Line {
            start,
            end,
            ..Self::new()
        }
    }

    /// Create a new line from coordinates
    pub fn from_coords(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Line::from_points(Vector2::new(x1, y1), Vector2::new(x2, y2))
    }

    /// Get the length of the line
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Get the direction vector (normalized)
    pub fn direction(&self) -> Vector2 {
        (self.end - self.start).normalize()
    }

    /// Get the midpoint of the line
    pub fn midpoint(&self) -> Vector2 {
        self.start.midpoint(&self.end)
    }
}

impl Default for Line {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Line {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&[self.start, self.end]).expect("two points")
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.start = transform.apply(self.start);
        self.end = transform.apply(self.end);
    }

    fn entity_type(&self) -> &'static str {
        "LINE"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        vec![
            SnapPoint::new(self.start, SnapKind::Endpoint, h),
            SnapPoint::new(self.end, SnapKind::Endpoint, h),
            SnapPoint::new(self.midpoint(), SnapKind::Midpoint, h),
        ]
    }
}
