//! Structural member entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// Structural role of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberKind {
    Beam,
    Column,
    Brace,
}

impl MemberKind {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            MemberKind::Beam => "Beam",
            MemberKind::Column => "Column",
            MemberKind::Brace => "Brace",
        }
    }
}

/// A structural member drawn between two nodes
///
/// Geometrically a line; semantically it carries the section assignment
/// that downstream design checks and the BOQ consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Common entity data
    pub common: EntityCommon,
    /// Start node
    pub start: Vector2,
    /// End node
    pub end: Vector2,
    /// Section designation ("300x600", "HEA200", ...)
    pub section: String,
    /// Structural role
    pub kind: MemberKind,
}

impl Member {
    /// Create a new member between two nodes
    pub fn new(start: Vector2, end: Vector2, section: impl Into<String>, kind: MemberKind) -> Self {
        Member {
            common: EntityCommon::new(),
            start,
            end,
            section: section.into(),
            kind,
        }
    }

    /// Member length
    pub fn length(&self) -> f64 {
        self.start.distance(&self.end)
    }

    /// Midpoint of the member axis
    pub fn midpoint(&self) -> Vector2 {
        self.start.midpoint(&self.end)
    }
}

impl Entity for Member {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&[self.start, self.end]).expect("two points")
    }

    fn apply_transform(&mut self, transform: &Transform) {
        self.start = transform.apply(self.start);
        self.end = transform.apply(self.end);
    }

    fn entity_type(&self) -> &'static str {
        "MEMBER"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        vec![
            SnapPoint::new(self.start, SnapKind::Node, h),
            SnapPoint::new(self.end, SnapKind::Node, h),
            SnapPoint::new(self.midpoint(), SnapKind::Midpoint, h),
        ]
    }
}
