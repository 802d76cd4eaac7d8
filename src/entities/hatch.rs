//! Hatch entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// A filled region bounded by a closed polygon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hatch {
    /// Common entity data
    pub common: EntityCommon,
    /// Closed boundary polygon (implicitly closed, no repeated last vertex)
    pub boundary: Vec<Vector2>,
    /// Pattern name ("SOLID", "ANSI31", ...)
    pub pattern: String,
    /// Pattern scale
    pub pattern_scale: f64,
    /// Pattern angle in radians
    pub pattern_angle: f64,
}

impl Hatch {
    /// Create a new hatch with the given boundary and pattern
    pub fn new(boundary: Vec<Vector2>, pattern: impl Into<String>) -> Self {
        Hatch {
            common: EntityCommon::new(),
            boundary,
            pattern: pattern.into(),
            pattern_scale: 1.0,
            pattern_angle: 0.0,
        }
    }

    /// Create a solid-filled hatch
    pub fn solid(boundary: Vec<Vector2>) -> Self {
        Hatch::new(boundary, "SOLID")
    }

    /// Enclosed area by the shoelace formula
    pub fn area(&self) -> f64 {
        let n = self.boundary.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let a = self.boundary[i];
            let b = self.boundary[(i + 1) % n];
            sum += a.cross(&b);
        }
        sum.abs() / 2.0
    }

    /// Boundary centroid (average of vertices)
    pub fn centroid(&self) -> Vector2 {
        if self.boundary.is_empty() {
            return Vector2::ZERO;
        }
        let sum = self
            .boundary
            .iter()
            .fold(Vector2::ZERO, |acc, v| acc + *v);
        sum / self.boundary.len() as f64
    }
}

impl Entity for Hatch {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&self.boundary)
            .unwrap_or_else(|| BoundingBox2D::from_point(Vector2::ZERO))
    }

    fn apply_transform(&mut self, transform: &Transform) {
        for vertex in &mut self.boundary {
            *vertex = transform.apply(*vertex);
        }
        self.pattern_scale *= transform.scale_factor();
    }

    fn entity_type(&self) -> &'static str {
        "HATCH"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        self.boundary
            .iter()
            .map(|v| SnapPoint::new(*v, SnapKind::Endpoint, h))
            .collect()
    }
}
