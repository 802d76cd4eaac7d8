//! Property-based tests for the geometry and history invariants

use approx::assert_relative_eq;
use proptest::prelude::*;
use strucad::entities::{EntityKind, Line};
use strucad::history::History;
use strucad::types::{Transform, Vector2};
use strucad::{Drawing, Viewport};

fn finite_coord() -> impl Strategy<Value = f64> {
    -1.0e4..1.0e4f64
}

proptest! {
    #[test]
    fn transform_inverse_round_trips(
        x in finite_coord(),
        y in finite_coord(),
        dx in finite_coord(),
        dy in finite_coord(),
        angle in -std::f64::consts::PI..std::f64::consts::PI,
        scale in 0.1..10.0f64,
    ) {
        let transform = Transform::translation(Vector2::new(dx, dy))
            .then(&Transform::rotation(angle))
            .then(&Transform::scaling(scale));
        let inverse = transform.inverse().unwrap();

        let p = Vector2::new(x, y);
        let q = inverse.apply(transform.apply(p));
        assert_relative_eq!(q.x, p.x, epsilon = 1e-6, max_relative = 1e-9);
        assert_relative_eq!(q.y, p.y, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn rotation_preserves_distance(
        x in finite_coord(),
        y in finite_coord(),
        angle in -std::f64::consts::PI..std::f64::consts::PI,
    ) {
        let p = Vector2::new(x, y);
        let rotated = Transform::rotation(angle).apply(p);
        assert_relative_eq!(rotated.length(), p.length(), epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn viewport_round_trips(
        wx in finite_coord(),
        wy in finite_coord(),
        ox in finite_coord(),
        oy in finite_coord(),
        scale in 0.001..1000.0f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.offset = Vector2::new(ox, oy);
        vp.scale = scale;

        let world = Vector2::new(wx, wy);
        let round = vp.screen_to_world(vp.world_to_screen(world));
        assert_relative_eq!(round.x, world.x, epsilon = 1e-6, max_relative = 1e-9);
        assert_relative_eq!(round.y, world.y, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn zoom_keeps_anchor_world_point(
        ax in 0.0..800.0f64,
        ay in 0.0..600.0f64,
        factor in 0.2..5.0f64,
    ) {
        let mut vp = Viewport::new(800.0, 600.0);
        vp.offset = Vector2::new(-37.0, 12.0);
        vp.scale = 2.0;
        let before = vp.screen_to_world(Vector2::new(ax, ay));
        vp.zoom_about(Vector2::new(ax, ay), factor);
        let after = vp.screen_to_world(Vector2::new(ax, ay));
        assert_relative_eq!(after.x, before.x, epsilon = 1e-6, max_relative = 1e-9);
        assert_relative_eq!(after.y, before.y, epsilon = 1e-6, max_relative = 1e-9);
    }

    #[test]
    fn history_cursor_stays_in_bounds(ops in proptest::collection::vec(0u8..3, 1..60)) {
        let mut history = History::with_capacity(Drawing::new(), 8);
        let mut edits = 0usize;
        for op in ops {
            match op {
                0 => {
                    edits += 1;
                    let mut state = Drawing::new();
                    for i in 0..edits {
                        state
                            .add_entity(EntityKind::Line(Line::from_coords(
                                0.0, 0.0, i as f64, 1.0,
                            )))
                            .unwrap();
                    }
                    history.record(state);
                    // After a record, the current state is the recorded one
                    prop_assert_eq!(history.current().entity_count(), edits);
                    prop_assert!(!history.can_redo());
                }
                1 => { history.undo(); }
                _ => { history.redo(); }
            }
            prop_assert!(history.len() <= 8);
            // current() must never panic regardless of the operation mix
            let _ = history.current().entity_count();
        }
    }

    #[test]
    fn undo_redo_is_identity(extra in 1usize..10) {
        let mut history = History::new(Drawing::new());
        for i in 1..=extra {
            let mut state = Drawing::new();
            for _ in 0..i {
                state
                    .add_entity(EntityKind::Line(Line::from_coords(0.0, 0.0, 1.0, 1.0)))
                    .unwrap();
            }
            history.record(state);
        }
        let before = history.current().entity_count();
        history.undo().unwrap();
        history.redo().unwrap();
        prop_assert_eq!(history.current().entity_count(), before);
    }
}
