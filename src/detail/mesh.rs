//! Triangle mesh for reinforcement-detail previews

use crate::types::{BoundingBox3D, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// An indexed triangle mesh
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriMesh {
    /// Vertex positions
    pub vertices: Vec<Vector3>,
    /// Triangles as vertex-index triples, counterclockwise seen from outside
    pub indices: Vec<[u32; 3]>,
}

impl TriMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        TriMesh::default()
    }

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }

    /// Bounding box of the mesh (None when empty)
    pub fn bounding_box(&self) -> Option<BoundingBox3D> {
        BoundingBox3D::from_points(&self.vertices)
    }

    /// Append another mesh, rebasing its indices
    pub fn merge(&mut self, other: &TriMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices
            .extend(other.indices.iter().map(|t| [t[0] + base, t[1] + base, t[2] + base]));
    }

    /// Append an axis-aligned box spanning `min` to `max`
    pub fn push_box(&mut self, min: Vector3, max: Vector3) {
        let base = self.vertices.len() as u32;
        let corners = [
            Vector3::new(min.x, min.y, min.z),
            Vector3::new(max.x, min.y, min.z),
            Vector3::new(max.x, max.y, min.z),
            Vector3::new(min.x, max.y, min.z),
            Vector3::new(min.x, min.y, max.z),
            Vector3::new(max.x, min.y, max.z),
            Vector3::new(max.x, max.y, max.z),
            Vector3::new(min.x, max.y, max.z),
        ];
        self.vertices.extend_from_slice(&corners);
        // 6 faces, 2 triangles each
        const FACES: [[u32; 4]; 6] = [
            [0, 3, 2, 1], // bottom (z = min)
            [4, 5, 6, 7], // top (z = max)
            [0, 1, 5, 4], // front (y = min)
            [2, 3, 7, 6], // back (y = max)
            [1, 2, 6, 5], // right (x = max)
            [3, 0, 4, 7], // left (x = min)
        ];
        for face in FACES {
            self.indices
                .push([base + face[0], base + face[1], base + face[2]]);
            self.indices
                .push([base + face[0], base + face[2], base + face[3]]);
        }
    }

    /// Append a closed cylinder between two points
    ///
    /// The side wall is an n-gon prism; `segments` is clamped to at least 3.
    /// A zero-length axis produces nothing.
    pub fn push_cylinder(&mut self, start: Vector3, end: Vector3, radius: f64, segments: u32) {
        let axis = end - start;
        if axis.length() == 0.0 || radius <= 0.0 {
            return;
        }
        let segments = segments.max(3);
        let dir = axis.normalize();

        // Orthonormal basis perpendicular to the axis. Reference axis picked
        // away from the cylinder direction to avoid a degenerate cross
        // product (same scheme as the arbitrary-axis convention).
        let reference = if dir.x.abs() < 1.0 / 64.0 && dir.y.abs() < 1.0 / 64.0 {
            Vector3::UNIT_Y
        } else {
            Vector3::UNIT_Z
        };
        let u = reference.cross(&dir).normalize();
        let v = dir.cross(&u).normalize();

        let base = self.vertices.len() as u32;
        for i in 0..segments {
            let angle = TAU * i as f64 / segments as f64;
            let rim = u * (radius * angle.cos()) + v * (radius * angle.sin());
            self.vertices.push(start + rim);
            self.vertices.push(end + rim);
        }
        // Cap centers
        let start_center = base + 2 * segments;
        let end_center = start_center + 1;
        self.vertices.push(start);
        self.vertices.push(end);

        for i in 0..segments {
            let j = (i + 1) % segments;
            let (s0, e0) = (base + 2 * i, base + 2 * i + 1);
            let (s1, e1) = (base + 2 * j, base + 2 * j + 1);
            // Side quad
            self.indices.push([s0, s1, e1]);
            self.indices.push([s0, e1, e0]);
            // Caps
            self.indices.push([start_center, s1, s0]);
            self.indices.push([end_center, e0, e1]);
        }
    }
}
