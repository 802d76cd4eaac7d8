//! Viewport transform
//!
//! Maps between screen (pixel) and world (drawing) coordinates for a
//! pan/zoom view. Both spaces are y-up; flipping for a y-down surface is
//! the renderer's concern.

use crate::types::{BoundingBox2D, Vector2};
use serde::{Deserialize, Serialize};

/// Minimum and maximum zoom, world-units-per-pixel wise
const MIN_SCALE: f64 = 1e-4;
const MAX_SCALE: f64 = 1e4;

/// A pan/zoom viewport over the drawing
///
/// `screen = (world - offset) * scale`; `offset` is the world coordinate
/// at the screen origin, `scale` is pixels per world unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// World coordinate shown at the screen origin
    pub offset: Vector2,
    /// Pixels per world unit
    pub scale: f64,
    /// Screen size in pixels
    pub screen_size: Vector2,
}

impl Viewport {
    /// Create a viewport with a 1:1 scale at the world origin
    pub fn new(screen_width: f64, screen_height: f64) -> Self {
        Viewport {
            offset: Vector2::ZERO,
            scale: 1.0,
            screen_size: Vector2::new(screen_width, screen_height),
        }
    }

    /// Convert a world point to screen coordinates
    pub fn world_to_screen(&self, world: Vector2) -> Vector2 {
        (world - self.offset) * self.scale
    }

    /// Convert a screen point to world coordinates
    pub fn screen_to_world(&self, screen: Vector2) -> Vector2 {
        screen / self.scale + self.offset
    }

    /// Convert a pixel distance to a world distance
    pub fn pixels_to_world(&self, pixels: f64) -> f64 {
        pixels / self.scale
    }

    /// Pan by a displacement in screen pixels
    pub fn pan(&mut self, screen_delta: Vector2) {
        self.offset = self.offset - screen_delta / self.scale;
    }

    /// Zoom by a factor about a screen anchor point
    ///
    /// The world point under the anchor stays under it after zooming.
    pub fn zoom_about(&mut self, screen_anchor: Vector2, factor: f64) {
        let new_scale = (self.scale * factor).clamp(MIN_SCALE, MAX_SCALE);
        let world_anchor = self.screen_to_world(screen_anchor);
        self.scale = new_scale;
        self.offset = world_anchor - screen_anchor / self.scale;
    }

    /// Fit a world bounding box into the screen with a pixel margin
    pub fn fit(&mut self, bbox: &BoundingBox2D, margin: f64) {
        let usable_w = (self.screen_size.x - 2.0 * margin).max(1.0);
        let usable_h = (self.screen_size.y - 2.0 * margin).max(1.0);
        let scale_x = if bbox.width() > 0.0 {
            usable_w / bbox.width()
        } else {
            MAX_SCALE
        };
        let scale_y = if bbox.height() > 0.0 {
            usable_h / bbox.height()
        } else {
            MAX_SCALE
        };
        self.scale = scale_x.min(scale_y).clamp(MIN_SCALE, MAX_SCALE);
        // Center the box on screen
        let screen_center = self.screen_size * 0.5;
        self.offset = bbox.center() - screen_center / self.scale;
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vector2, b: Vector2) {
        assert!((a - b).length() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_round_trip() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.offset = Vector2::new(12.0, -4.0);
        vp.scale = 2.5;
        let world = Vector2::new(100.0, 50.0);
        assert_close(vp.screen_to_world(vp.world_to_screen(world)), world);
    }

    #[test]
    fn test_pan_moves_world_under_cursor() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.scale = 2.0;
        let before = vp.screen_to_world(Vector2::new(100.0, 100.0));
        vp.pan(Vector2::new(50.0, 0.0));
        let after = vp.screen_to_world(Vector2::new(150.0, 100.0));
        assert_close(before, after);
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.offset = Vector2::new(5.0, 5.0);
        let anchor = Vector2::new(400.0, 300.0);
        let world_before = vp.screen_to_world(anchor);
        vp.zoom_about(anchor, 1.8);
        assert_close(vp.screen_to_world(anchor), world_before);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut vp = Viewport::new(800.0, 600.0);
        for _ in 0..100 {
            vp.zoom_about(Vector2::ZERO, 10.0);
        }
        assert!(vp.scale <= 1e4);
        for _ in 0..200 {
            vp.zoom_about(Vector2::ZERO, 0.1);
        }
        assert!(vp.scale >= 1e-4);
    }

    #[test]
    fn test_fit_contains_bbox() {
        let mut vp = Viewport::new(800.0, 600.0);
        let bbox = BoundingBox2D::new(Vector2::new(-50.0, -20.0), Vector2::new(150.0, 80.0));
        vp.fit(&bbox, 8.0);
        for corner in [bbox.min, bbox.max] {
            let s = vp.world_to_screen(corner);
            assert!(s.x >= 0.0 && s.x <= 800.0, "x out of view: {}", s);
            assert!(s.y >= 0.0 && s.y <= 600.0, "y out of view: {}", s);
        }
        // Centered
        assert_close(
            vp.world_to_screen(bbox.center()),
            Vector2::new(400.0, 300.0),
        );
    }
}
