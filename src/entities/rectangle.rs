//! Rectangle entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// An axis-defined rectangle with optional rotation about its corner
///
/// Stored as corner + size + rotation rather than four points so the shape
/// stays rectangular under editing; a general transform that would shear it
/// converts the corners explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    /// Common entity data
    pub common: EntityCommon,
    /// Anchor corner (lower-left before rotation)
    pub corner: Vector2,
    /// Width along the local X axis
    pub width: f64,
    /// Height along the local Y axis
    pub height: f64,
    /// Rotation about the anchor corner, radians
    pub rotation: f64,
}

impl Rectangle {
    /// Create a new rectangle from a corner and size
    pub fn new(corner: Vector2, width: f64, height: f64) -> Self {
        Rectangle {
            common: EntityCommon::new(),
            corner,
            width,
            height,
            rotation: 0.0,
        }
    }

    /// The four corners in counterclockwise order starting at the anchor
    pub fn corners(&self) -> [Vector2; 4] {
        let rot = Transform::rotation_about(self.corner, self.rotation);
        [
            self.corner,
            rot.apply(self.corner + Vector2::new(self.width, 0.0)),
            rot.apply(self.corner + Vector2::new(self.width, self.height)),
            rot.apply(self.corner + Vector2::new(0.0, self.height)),
        ]
    }

    /// Center of the rectangle
    pub fn center(&self) -> Vector2 {
        let corners = self.corners();
        corners[0].midpoint(&corners[2])
    }

    /// Area of the rectangle
    pub fn area(&self) -> f64 {
        (self.width * self.height).abs()
    }

    /// Perimeter of the rectangle
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width.abs() + self.height.abs())
    }
}

impl Entity for Rectangle {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&self.corners()).expect("four corners")
    }

    fn apply_transform(&mut self, transform: &Transform) {
        // Transform the anchor, fold rotation into the stored angle and
        // scale into the stored size. Assumes the editing transforms
        // (translate/rotate/uniform scale); shear is not representable.
        self.corner = transform.apply(self.corner);
        let x_axis = transform.apply_vector(Vector2::new(self.rotation.cos(), self.rotation.sin()));
        self.rotation = x_axis.angle();
        let scale = transform.scale_factor();
        self.width *= scale;
        self.height *= scale;
    }

    fn entity_type(&self) -> &'static str {
        "RECTANGLE"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        let corners = self.corners();
        let mut snaps = Vec::with_capacity(9);
        for i in 0..4 {
            snaps.push(SnapPoint::new(corners[i], SnapKind::Endpoint, h));
            snaps.push(SnapPoint::new(
                corners[i].midpoint(&corners[(i + 1) % 4]),
                SnapKind::Midpoint,
                h,
            ));
        }
        snaps.push(SnapPoint::new(self.center(), SnapKind::Center, h));
        snaps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rectangle_corners() {
        let rect = Rectangle::new(Vector2::ZERO, 4.0, 2.0);
        let corners = rect.corners();
        assert_eq!(corners[2], Vector2::new(4.0, 2.0));
        assert_eq!(rect.center(), Vector2::new(2.0, 1.0));
    }

    #[test]
    fn test_rectangle_area_perimeter() {
        let rect = Rectangle::new(Vector2::ZERO, 4.0, 2.0);
        assert_eq!(rect.area(), 8.0);
        assert_eq!(rect.perimeter(), 12.0);
    }

    #[test]
    fn test_rotated_rectangle_corners() {
        let mut rect = Rectangle::new(Vector2::ZERO, 4.0, 2.0);
        rect.rotation = FRAC_PI_2;
        let corners = rect.corners();
        assert!((corners[1] - Vector2::new(0.0, 4.0)).length() < 1e-9);
    }

    #[test]
    fn test_rectangle_transform_scales_size() {
        let mut rect = Rectangle::new(Vector2::ZERO, 4.0, 2.0);
        rect.apply_transform(&Transform::scaling_about(Vector2::ZERO, 2.0));
        assert_eq!(rect.width, 8.0);
        assert_eq!(rect.height, 4.0);
        assert_eq!(rect.corner, Vector2::ZERO);
    }

    #[test]
    fn test_rectangle_snap_points() {
        let rect = Rectangle::new(Vector2::ZERO, 4.0, 2.0);
        let snaps = rect.snap_points();
        assert_eq!(snaps.len(), 9);
        assert_eq!(
            snaps.iter().filter(|s| s.kind == SnapKind::Center).count(),
            1
        );
    }
}
