//! Selection and hit-testing
//!
//! Point picking measures distance to the entity outline; window selection
//! takes entities fully inside the rectangle, crossing selection takes
//! everything the rectangle touches. Selection order is deterministic
//! (insertion order).

use crate::document::Drawing;
use crate::entities::{Entity, EntityKind};
use crate::types::{BoundingBox2D, Handle, Transform, Vector2};
use indexmap::IndexSet;

/// An insertion-ordered set of selected entity handles
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    handles: IndexSet<Handle>,
}

impl SelectionSet {
    /// Create an empty selection
    pub fn new() -> Self {
        SelectionSet {
            handles: IndexSet::new(),
        }
    }

    /// Add a handle; returns false if it was already selected
    pub fn add(&mut self, handle: Handle) -> bool {
        self.handles.insert(handle)
    }

    /// Remove a handle from the selection
    pub fn remove(&mut self, handle: Handle) -> bool {
        self.handles.shift_remove(&handle)
    }

    /// Toggle a handle in the selection
    pub fn toggle(&mut self, handle: Handle) {
        if !self.handles.insert(handle) {
            self.handles.shift_remove(&handle);
        }
    }

    /// Whether a handle is selected
    pub fn contains(&self, handle: Handle) -> bool {
        self.handles.contains(&handle)
    }

    /// Number of selected entities
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Whether the selection is empty
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Iterate the selected handles in selection order
    pub fn iter(&self) -> impl Iterator<Item = Handle> + '_ {
        self.handles.iter().copied()
    }

    /// Drop handles that no longer exist in the drawing
    pub fn retain_existing(&mut self, drawing: &Drawing) {
        self.handles.retain(|h| drawing.get_entity(*h).is_some());
    }
}

/// Distance from a point to the segment `a -> b`
pub fn point_segment_distance(p: Vector2, a: Vector2, b: Vector2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(&a);
    }
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    p.distance(&(a + ab * t))
}

/// Distance from a point to an entity's outline
pub fn distance_to_entity(entity: &EntityKind, p: Vector2) -> f64 {
    match entity {
        EntityKind::Line(e) => point_segment_distance(p, e.start, e.end),
        EntityKind::Member(e) => point_segment_distance(p, e.start, e.end),
        EntityKind::Circle(e) => (p.distance(&e.center) - e.radius).abs(),
        EntityKind::Rectangle(e) => {
            let c = e.corners();
            (0..4)
                .map(|i| point_segment_distance(p, c[i], c[(i + 1) % 4]))
                .fold(f64::INFINITY, f64::min)
        }
        EntityKind::Polyline(e) => e
            .segments()
            .map(|(a, b)| point_segment_distance(p, a, b))
            .fold(f64::INFINITY, f64::min)
            .min(
                // Single-vertex polyline has no segments
                e.vertices
                    .first()
                    .map(|v| p.distance(v))
                    .unwrap_or(f64::INFINITY),
            ),
        EntityKind::Hatch(e) => {
            let n = e.boundary.len();
            if n == 0 {
                return f64::INFINITY;
            }
            (0..n)
                .map(|i| point_segment_distance(p, e.boundary[i], e.boundary[(i + 1) % n]))
                .fold(f64::INFINITY, f64::min)
        }
        EntityKind::Text(e) => {
            if e.bounding_box().contains(p) {
                0.0
            } else {
                p.distance(&e.insertion)
            }
        }
        EntityKind::Dimension(e) => {
            let (a, b) = e.dim_line();
            point_segment_distance(p, a, b)
                .min(point_segment_distance(p, e.p1, a))
                .min(point_segment_distance(p, e.p2, b))
        }
    }
}

fn is_selectable(drawing: &Drawing, entity: &EntityKind) -> bool {
    !entity.as_entity().is_invisible()
        && drawing
            .layers
            .get(entity.as_entity().layer())
            .map(|l| l.is_visible())
            .unwrap_or(false)
}

/// Pick the entity nearest to `point` within `tolerance` world units
///
/// Entities on invisible layers are skipped. Ties go to the lower handle
/// so repeated picks are deterministic.
pub fn pick(drawing: &Drawing, point: Vector2, tolerance: f64) -> Option<Handle> {
    let mut best: Option<(f64, Handle)> = None;
    for entity in drawing.entities() {
        if !is_selectable(drawing, entity) {
            continue;
        }
        let dist = distance_to_entity(entity, point);
        if dist > tolerance {
            continue;
        }
        let handle = entity.as_entity().handle();
        let better = match best {
            None => true,
            Some((best_dist, best_handle)) => {
                dist < best_dist || (dist == best_dist && handle < best_handle)
            }
        };
        if better {
            best = Some((dist, handle));
        }
    }
    best.map(|(_, h)| h)
}

/// Select entities fully inside the rectangle (window selection)
pub fn window_select(drawing: &Drawing, window: &BoundingBox2D) -> Vec<Handle> {
    let mut handles: Vec<Handle> = drawing
        .entities()
        .filter(|e| is_selectable(drawing, e))
        .filter(|e| window.contains_box(&e.as_entity().bounding_box()))
        .map(|e| e.as_entity().handle())
        .collect();
    handles.sort();
    handles
}

/// Select entities touched by the rectangle (crossing selection)
pub fn crossing_select(drawing: &Drawing, window: &BoundingBox2D) -> Vec<Handle> {
    let mut handles: Vec<Handle> = drawing
        .entities()
        .filter(|e| is_selectable(drawing, e))
        .filter(|e| window.intersects(&e.as_entity().bounding_box()))
        .map(|e| e.as_entity().handle())
        .collect();
    handles.sort();
    handles
}

/// Apply a transform to every selected entity whose layer allows editing
///
/// Entities on locked layers are left untouched. Returns the number of
/// entities actually transformed.
pub fn transform_selected(
    drawing: &mut Drawing,
    selection: &SelectionSet,
    transform: &Transform,
) -> usize {
    let mut transformed = 0;
    for handle in selection.iter() {
        if !drawing.is_entity_editable(handle) {
            continue;
        }
        if let Ok(entity) = drawing.get_entity_mut(handle) {
            entity.as_entity_mut().apply_transform(transform);
            transformed += 1;
        }
    }
    transformed
}
