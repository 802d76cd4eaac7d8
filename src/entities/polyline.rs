//! Polyline entity

use super::{impl_entity_common, Entity, EntityCommon};
use crate::snap::{SnapKind, SnapPoint};
use crate::types::{BoundingBox2D, Transform, Vector2};
use serde::{Deserialize, Serialize};

/// A connected sequence of line segments, open or closed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    /// Common entity data
    pub common: EntityCommon,
    /// Vertices in drawing order
    pub vertices: Vec<Vector2>,
    /// Whether the last vertex connects back to the first
    pub closed: bool,
}

impl Polyline {
    /// Create a new empty polyline
    pub fn new() -> Self {
        Polyline {
            common: EntityCommon::new(),
            vertices: Vec::new(),
            closed: false,
        }
    }

    /// Create a polyline from vertices
    pub fn from_vertices(vertices: Vec<Vector2>) -> Self {
        Polyline {
            vertices,
            ..Self::new()
        }
    }

    /// Create a closed polyline from vertices
    pub fn closed(vertices: Vec<Vector2>) -> Self {
        Polyline {
            vertices,
            closed: true,
            ..Self::new()
        }
    }

    /// Append a vertex
    pub fn push(&mut self, vertex: Vector2) {
        self.vertices.push(vertex);
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Iterate the segments as (start, end) pairs
    pub fn segments(&self) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
        let n = self.vertices.len();
        let closing = if self.closed && n >= 3 { 1 } else { 0 };
        (0..n.saturating_sub(1) + closing)
            .map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Total length along all segments
    pub fn length(&self) -> f64 {
        self.segments().map(|(a, b)| a.distance(&b)).sum()
    }
}

impl Default for Polyline {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Polyline {
    impl_entity_common!();

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&self.vertices)
            .unwrap_or_else(|| BoundingBox2D::from_point(Vector2::ZERO))
    }

    fn apply_transform(&mut self, transform: &Transform) {
        for vertex in &mut self.vertices {
            *vertex = transform.apply(*vertex);
        }
    }

    fn entity_type(&self) -> &'static str {
        "POLYLINE"
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let h = self.common.handle;
        let mut snaps: Vec<SnapPoint> = self
            .vertices
            .iter()
            .map(|v| SnapPoint::new(*v, SnapKind::Endpoint, h))
            .collect();
        for (a, b) in self.segments() {
            snaps.push(SnapPoint::new(a.midpoint(&b), SnapKind::Midpoint, h));
        }
        snaps
    }
}
