//! Undo/redo history
//!
//! The history is a linear list of full drawing snapshots with an index
//! cursor. Recording after an undo discards the redo tail; the list is
//! capacity-capped, dropping the oldest snapshot when full.

use crate::document::Drawing;

/// Default number of snapshots kept
pub const DEFAULT_CAPACITY: usize = 100;

/// Snapshot-based undo/redo history for a drawing
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Drawing>,
    /// Index of the current snapshot in `snapshots`
    cursor: usize,
    capacity: usize,
}

impl History {
    /// Create a history seeded with the initial drawing state
    pub fn new(initial: Drawing) -> Self {
        Self::with_capacity(initial, DEFAULT_CAPACITY)
    }

    /// Create a history with a specific snapshot capacity (minimum 2)
    pub fn with_capacity(initial: Drawing, capacity: usize) -> Self {
        History {
            snapshots: vec![initial],
            cursor: 0,
            capacity: capacity.max(2),
        }
    }

    /// Record a new state after an edit
    ///
    /// Discards any redo tail beyond the cursor, then appends. When the
    /// capacity is exceeded the oldest snapshot is dropped.
    pub fn record(&mut self, state: Drawing) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(state);
        if self.snapshots.len() > self.capacity {
            self.snapshots.remove(0);
        } else {
            self.cursor += 1;
        }
        debug_assert!(self.cursor < self.snapshots.len());
    }

    /// Move back one step and return the state to restore
    ///
    /// Returns None (and does nothing) when already at the oldest state.
    pub fn undo(&mut self) -> Option<&Drawing> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(&self.snapshots[self.cursor])
    }

    /// Move forward one step and return the state to restore
    ///
    /// Returns None (and does nothing) when already at the newest state.
    pub fn redo(&mut self) -> Option<&Drawing> {
        if self.cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor += 1;
        Some(&self.snapshots[self.cursor])
    }

    /// The state at the cursor
    pub fn current(&self) -> &Drawing {
        &self.snapshots[self.cursor]
    }

    /// Whether undo is possible
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether redo is possible
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots currently held
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the history never drops its current snapshot
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{EntityKind, Line};

    fn state_with_lines(count: usize) -> Drawing {
        let mut drawing = Drawing::new();
        for i in 0..count {
            drawing
                .add_entity(EntityKind::Line(Line::from_coords(
                    0.0, 0.0, i as f64, 1.0,
                )))
                .unwrap();
        }
        drawing
    }

    #[test]
    fn test_undo_restores_prior_state() {
        let mut history = History::new(state_with_lines(0));
        history.record(state_with_lines(1));
        assert!(history.can_undo());

        let restored = history.undo().unwrap();
        assert_eq!(restored.entity_count(), 0);
        assert!(!history.can_undo());
        assert!(history.can_redo());
    }

    #[test]
    fn test_redo_after_undo() {
        let mut history = History::new(state_with_lines(0));
        history.record(state_with_lines(1));
        history.undo().unwrap();
        let redone = history.redo().unwrap();
        assert_eq!(redone.entity_count(), 1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_at_oldest_is_noop() {
        let mut history = History::new(state_with_lines(0));
        assert!(history.undo().is_none());
        assert_eq!(history.current().entity_count(), 0);
    }

    #[test]
    fn test_redo_at_newest_is_noop() {
        let mut history = History::new(state_with_lines(0));
        history.record(state_with_lines(1));
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_record_discards_redo_tail() {
        let mut history = History::new(state_with_lines(0));
        history.record(state_with_lines(1));
        history.record(state_with_lines(2));
        history.undo().unwrap();
        history.undo().unwrap();
        // New edit from the past: states 1 and 2 are gone
        history.record(state_with_lines(5));
        assert!(!history.can_redo());
        assert_eq!(history.current().entity_count(), 5);
        assert_eq!(history.undo().unwrap().entity_count(), 0);
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = History::with_capacity(state_with_lines(0), 3);
        for i in 1..=5 {
            history.record(state_with_lines(i));
        }
        assert_eq!(history.len(), 3);
        assert_eq!(history.current().entity_count(), 5);
        // Oldest reachable state is now 3
        history.undo().unwrap();
        let oldest = history.undo().unwrap();
        assert_eq!(oldest.entity_count(), 3);
        assert!(!history.can_undo());
    }
}
