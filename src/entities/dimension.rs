//! Linear dimension entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// A linear dimension between two definition points
///
/// The dimension line runs parallel to `p1 -> p2`, offset perpendicular by
/// `offset`. The displayed value is the measured distance unless overridden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    /// Common entity data
    pub common: EntityCommon,
    /// First definition point
    pub p1: Vector2,
    /// Second definition point
    pub p2: Vector2,
    /// Perpendicular offset of the dimension line from the measured points
    pub offset: f64,
    /// Optional text override; `None` displays the measured value
    pub text_override: Option<String>,
}

impl Dimension {
    /// Create a new linear dimension
    pub fn new(p1: Vector2, p2: Vector2, offset: f64) -> Self {
        Dimension {
            common: EntityCommon::new(),
            p1,
            p2,
            offset,
            text_override: None,
        }
    }

    /// The measured distance
    pub fn measurement(&self) -> f64 {
        self.p1.distance(&self.p2)
    }

    /// The displayed text
    pub fn display_text(&self) -> String {
        match &self.text_override {
            Some(text) => text.clone(),
            None => format!("{:.2}", self.measurement()),
        }
    }

    /// Endpoints of the dimension line itself
    pub fn dim_line(&self) -> (Vector2, Vector2) {
        let dir = (self.p2 - self.p1).normalize();
        let normal = dir.perpendicular();
        (
            self.p1 + normal * self.offset,
            self.p2 + normal * self.offset,
        )
    }

    /// Midpoint of the dimension line, where the text sits
    pub fn text_position(&self) -> Vector2 {
        let (a, b) = self.dim_line();
        a.midpoint(&b)
    }
}

impl Entity for Dimension {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        let (a, b) = self.dim_line();
        BoundingBox2D::from_points(&[self.p1, self.p2, a, b]).expect("four points")
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.p1 = transform.apply(self.p1);
        self.p2 = transform.apply(self.p2);
        self.offset *= transform.scale_factor();
    }

    fn entity_type(&self) -> &'static str {
        "DIMENSION"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        vec![
            SnapPoint::new(self.p1, SnapKind::Endpoint, h),
            SnapPoint::new(self.p2, SnapKind::Endpoint, h),
            SnapPoint::new(self.text_position(), SnapKind::Node, h),
        ]
    }
}
