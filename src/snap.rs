//! Snap-point resolution
//!
//! A snap point is a candidate coordinate (endpoint, midpoint, center, ...)
//! the drawing surface highlights when the pointer is within tolerance.
//! Resolution is a linear scan over the visible entities; candidates are
//! generated per shape and the nearest one within tolerance wins, with ties
//! broken by kind priority.

use crate::document::Drawing;
use crate::entities::Entity;
use crate::types::{Handle, Vector2};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Active snap kinds, mirroring the classic osnap mode bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SnapMode: u32 {
        const ENDPOINT = 0x01;
        const MIDPOINT = 0x02;
        const CENTER   = 0x04;
        const QUADRANT = 0x08;
        const NODE     = 0x10;
        const GRID     = 0x20;
    }
}

impl SnapMode {
    /// The default object-snap set (everything except grid)
    pub fn object_snaps() -> Self {
        SnapMode::ENDPOINT | SnapMode::MIDPOINT | SnapMode::CENTER | SnapMode::QUADRANT | SnapMode::NODE
    }
}

impl Default for SnapMode {
    fn default() -> Self {
        Self::object_snaps()
    }
}

/// The kind of a snap candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapKind {
    /// Segment or shape endpoint
    Endpoint,
    /// Segment midpoint
    Midpoint,
    /// Circle or shape center
    Center,
    /// Circle quadrant (E/N/W/S)
    Quadrant,
    /// Point-like feature (text insertion, member node)
    Node,
    /// Grid intersection
    Grid,
}

impl SnapKind {
    /// Tie-break priority: lower wins when two candidates are equidistant
    pub fn priority(&self) -> u8 {
        match self {
            SnapKind::Endpoint => 0,
            SnapKind::Midpoint => 1,
            SnapKind::Center => 2,
            SnapKind::Quadrant => 3,
            SnapKind::Node => 4,
            SnapKind::Grid => 5,
        }
    }

    fn mode_bit(&self) -> SnapMode {
        match self {
            SnapKind::Endpoint => SnapMode::ENDPOINT,
            SnapKind::Midpoint => SnapMode::MIDPOINT,
            SnapKind::Center => SnapMode::CENTER,
            SnapKind::Quadrant => SnapMode::QUADRANT,
            SnapKind::Node => SnapMode::NODE,
            SnapKind::Grid => SnapMode::GRID,
        }
    }
}

/// A resolved snap candidate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapPoint {
    /// World coordinate of the candidate
    pub point: Vector2,
    /// Candidate kind
    pub kind: SnapKind,
    /// Handle of the entity that produced the candidate
    /// (`Handle::NULL` for grid candidates)
    pub source: Handle,
}

impl SnapPoint {
    /// Create a new snap point
    pub fn new(point: Vector2, kind: SnapKind, source: Handle) -> Self {
        SnapPoint {
            point,
            kind,
            source,
        }
    }
}

/// Resolve the snap point nearest to `cursor`, within `tolerance` world units
///
/// Entities on invisible layers are skipped. Returns `None` when no
/// candidate lies within tolerance.
pub fn resolve_snap(
    drawing: &Drawing,
    cursor: Vector2,
    tolerance: f64,
    mode: SnapMode,
) -> Option<SnapPoint> {
    let mut best: Option<(f64, SnapPoint)> = None;
    let mut consider = |candidate: SnapPoint| {
        let dist = candidate.point.distance(&cursor);
        if dist > tolerance {
            return;
        }
        let better = match &best {
            None => true,
            Some((best_dist, best_point)) => {
                dist < *best_dist
                    || (dist == *best_dist
                        && candidate.kind.priority() < best_point.kind.priority())
            }
        };
        if better {
            best = Some((dist, candidate));
        }
    };

    for entity in drawing.entities() {
        let layer = entity.as_entity().layer();
        let visible = drawing
            .layers
            .get(layer)
            .map(|l| l.is_visible())
            .unwrap_or(false);
        if !visible || entity.as_entity().is_invisible() {
            continue;
        }
        for candidate in entity.as_entity().snap_points() {
            if mode.contains(candidate.kind.mode_bit()) {
                consider(candidate);
            }
        }
    }

    if mode.contains(SnapMode::GRID) {
        let spacing = drawing.settings.grid_spacing;
        if spacing > 0.0 {
            let grid = Vector2::new(
                (cursor.x / spacing).round() * spacing,
                (cursor.y / spacing).round() * spacing,
            );
            consider(SnapPoint::new(grid, SnapKind::Grid, Handle::NULL));
        }
    }

    best.map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Drawing;
    use crate::entities::{EntityKind, Line};
    use crate::tables::Layer;

    fn drawing_with_line() -> Drawing {
        let mut drawing = Drawing::new();
        let line = Line::from_coords(0.0, 0.0, 10.0, 0.0);
        drawing.add_entity(EntityKind::Line(line)).unwrap();
        drawing
    }

    #[test]
    fn test_snap_to_endpoint() {
        let drawing = drawing_with_line();
        let snap = resolve_snap(
            &drawing,
            Vector2::new(0.4, 0.3),
            1.0,
            SnapMode::object_snaps(),
        )
        .unwrap();
        assert_eq!(snap.kind, SnapKind::Endpoint);
        assert_eq!(snap.point, Vector2::ZERO);
    }

    #[test]
    fn test_snap_to_midpoint() {
        let drawing = drawing_with_line();
        let snap = resolve_snap(
            &drawing,
            Vector2::new(5.2, 0.1),
            1.0,
            SnapMode::object_snaps(),
        )
        .unwrap();
        assert_eq!(snap.kind, SnapKind::Midpoint);
        assert_eq!(snap.point, Vector2::new(5.0, 0.0));
    }

    #[test]
    fn test_snap_outside_tolerance() {
        let drawing = drawing_with_line();
        let snap = resolve_snap(
            &drawing,
            Vector2::new(50.0, 50.0),
            1.0,
            SnapMode::object_snaps(),
        );
        assert!(snap.is_none());
    }

    #[test]
    fn test_snap_empty_drawing() {
        let drawing = Drawing::new();
        assert!(resolve_snap(&drawing, Vector2::ZERO, 1.0, SnapMode::object_snaps()).is_none());
    }

    #[test]
    fn test_snap_skips_hidden_layer() {
        let mut drawing = Drawing::new();
        let mut hidden = Layer::new("Hidden");
        hidden.turn_off();
        drawing.add_layer(hidden).unwrap();
        let mut line = Line::from_coords(0.0, 0.0, 10.0, 0.0);
        line.common.layer = "Hidden".to_string();
        drawing.add_entity(EntityKind::Line(line)).unwrap();

        let snap = resolve_snap(
            &drawing,
            Vector2::new(0.1, 0.1),
            1.0,
            SnapMode::object_snaps(),
        );
        assert!(snap.is_none());
    }

    #[test]
    fn test_snap_mode_filtering() {
        let drawing = drawing_with_line();
        // Midpoint disabled: the nearest candidate near the middle is now
        // an endpoint, which lies outside tolerance.
        let snap = resolve_snap(&drawing, Vector2::new(5.0, 0.0), 1.0, SnapMode::ENDPOINT);
        assert!(snap.is_none());
    }

    #[test]
    fn test_grid_snap() {
        let mut drawing = Drawing::new();
        drawing.settings.grid_spacing = 5.0;
        let snap = resolve_snap(&drawing, Vector2::new(4.7, 5.2), 1.0, SnapMode::GRID).unwrap();
        assert_eq!(snap.kind, SnapKind::Grid);
        assert_eq!(snap.point, Vector2::new(5.0, 5.0));
        assert!(snap.source.is_null());
    }

    #[test]
    fn test_endpoint_wins_tie() {
        // Zero-length line: endpoint and midpoint coincide. Endpoint has
        // higher priority and must win.
        let mut drawing = Drawing::new();
        let line = Line::from_coords(1.0, 1.0, 1.0, 1.0);
        drawing.add_entity(EntityKind::Line(line)).unwrap();
        let snap = resolve_snap(
            &drawing,
            Vector2::new(1.0, 1.0),
            0.5,
            SnapMode::object_snaps(),
        )
        .unwrap();
        assert_eq!(snap.kind, SnapKind::Endpoint);
    }
}
