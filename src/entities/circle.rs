//! Circle entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A circle defined by center and radius
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Common entity data
    pub common: EntityCommon,
    /// Center point
    pub center: Vector2,
    /// Radius
    pub radius: f64,
}

impl Circle {
    /// Create a new circle
    pub fn new(center: Vector2, radius: f64) -> Self {
        Circle {
            common: EntityCommon::new(),
            center,
            radius,
        }
    }

    /// Get the area of the circle
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Get the circumference of the circle
    pub fn circumference(&self) -> f64 {
        2.0 * PI * self.radius
    }

    /// The four quadrant points (E, N, W, S)
    pub fn quadrants(&self) -> [Vector2; 4] {
        [
            self.center + Vector2::new(self.radius, 0.0),
            self.center + Vector2::new(0.0, self.radius),
            self.center - Vector2::new(self.radius, 0.0),
            self.center - Vector2::new(0.0, self.radius),
        ]
    }
}

impl Entity for Circle {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        let r = Vector2::new(self.radius, self.radius);
        BoundingBox2D::new(self.center - r, self.center + r)
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.center = transform.apply(self.center);
        self.radius *= transform.scale_factor();
    }

    fn entity_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        let mut snaps = vec![SnapPoint::new(self.center, SnapKind::Center, h)];
        for q in self.quadrants() {
            snaps.push(SnapPoint::new(q, SnapKind::Quadrant, h));
        }
        snaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_area() {
        let circle = Circle::new(Vector2::ZERO, 2.0);
        assert!((circle.area() - 4.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn test_circle_bounding_box() {
        let circle = Circle::new(Vector2::new(5.0, 5.0), 2.0);
        let bbox = circle.bounding_box();
        assert_eq!(bbox.min, Vector2::new(3.0, 3.0));
        assert_eq!(bbox.max, Vector2::new(7.0, 7.0));
    }

    #[test]
    fn test_circle_scale() {
        let mut circle = Circle::new(Vector2::new(1.0, 0.0), 2.0);
        circle.apply_transform(&Transform::scaling_about(Vector2::ZERO, 3.0));
        assert_eq!(circle.radius, 6.0);
        assert_eq!(circle.center, Vector2::new(3.0, 0.0));
    }

    #[test]
    fn test_circle_snap_points() {
        let circle = Circle::new(Vector2::ZERO, 1.0);
        let snaps = circle.snap_points();
        assert_eq!(snaps.len(), 5);
        assert_eq!(snaps[0].kind, SnapKind::Center);
        assert!(snaps
            .iter()
            .any(|s| s.kind == SnapKind::Quadrant && s.point == Vector2::new(0.0, 1.0)));
    }
}
