//! Text entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// A single-line text annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    /// Common entity data
    pub common: EntityCommon,
    /// Insertion point (baseline left)
    pub insertion: Vector2,
    /// Text height in drawing units
    pub height: f64,
    /// Rotation in radians
    pub rotation: f64,
    /// Text content
    pub value: String,
}

impl Text {
    /// Create a new text entity
    pub fn new(insertion: Vector2, height: f64, value: impl Into<String>) -> Self {
        Text {
            common: EntityCommon::new(),
            insertion,
            height,
            rotation: 0.0,
            value: value.into(),
        }
    }

    /// Approximate width assuming an average glyph aspect ratio
    ///
    /// Good enough for bounding-box and selection purposes; exact metrics
    /// belong to the rendering layer.
    pub fn approximate_width(&self) -> f64 {
        self.value.chars().count() as f64 * self.height * 0.6
    }
}

impl Entity for Text {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        let rot = Transform::rotation_about(self.insertion, self.rotation);
        let w = self.approximate_width();
        let corners = [
            self.insertion,
            rot.apply(self.insertion + Vector2::new(w, 0.0)),
            rot.apply(self.insertion + Vector2::new(w, self.height)),
            rot.apply(self.insertion + Vector2::new(0.0, self.height)),
        ];
        BoundingBox2D::from_points(&corners).expect("four corners")
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.insertion = transform.apply(self.insertion);
        let x_axis = transform.apply_vector(Vector2::new(self.rotation.cos(), self.rotation.sin()));
        self.rotation = x_axis.angle();
        self.height *= transform.scale_factor();
    }

    fn entity_type(&self) -> &'static str {
        "TEXT"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        vec![SnapPoint::new(
            self.insertion,
            SnapKind::Node,
            self.common.handle,
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_creation() {
        let text = Text::new(Vector2::new(1.0, 2.0), 2.5, "FOOTING F1");
        assert_eq!(text.value, "FOOTING F1");
        assert_eq!(text.entity_type(), "TEXT");
    }

    #[test]
    fn test_text_bbox_grows_with_content() {
        let short = Text::new(Vector2::ZERO, 2.5, "A");
        let long = Text::new(Vector2::ZERO, 2.5, "ABCDEF");
        assert!(long.bounding_box().width() > short.bounding_box().width());
    }

    #[test]
    fn test_text_snap_is_node() {
        let text = Text::new(Vector2::new(3.0, 4.0), 2.5, "S1");
        let snaps = text.snap_points();
        assert_eq!(snaps.len(), 1);
        assert_eq!(snaps[0].kind, SnapKind::Node);
        assert_eq!(snaps[0].point, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_text_scale() {
        let mut text = Text::new(Vector2::ZERO, 2.5, "S1");
        text.apply_transform(&Transform::scaling(2.0));
        assert_eq!(text.height, 5.0);
    }
}
