// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Trail-based backtracking for the search engine.
//!
//! Every change to the climb state is recorded on the trail as the slot that
//! changed and the value it held before. Backtracking pops entries back to a
//! checkpoint and writes the old values back, so undoing a step costs O(1)
//! per recorded change.

/// A trailed location in [`crate::state::ClimbState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Total height climbed so far.
    Climbed,
    /// Number of steps taken so far.
    Depth,
    /// The step taken at the given position.
    Path(usize),
}

/// A single entry in the trail, recording one state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TrailEntry {
    slot: Slot,
    /// The old value before the change (stored as u64)
    old_value: u64,
}

/// The trail system for O(1) backtracking.
///
/// Each [`crate::context::SearchContext`] owns its own trail. Checkpoints are
/// plain trail lengths, so the engine can keep one per stack entry.
#[derive(Debug, Default)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    /// Create a new empty trail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a trail with room for `capacity` changes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// The current position, to pass to [`Trail::pop_to`] later.
    pub fn checkpoint(&self) -> usize {
        self.entries.len()
    }

    /// Record a state change.
    pub(crate) fn record_change(&mut self, slot: Slot, old_value: u64) {
        self.entries.push(TrailEntry { slot, old_value });
    }

    /// Pop the most recent change recorded after `checkpoint`.
    ///
    /// Returns the slot and the value to restore, or `None` once the trail is
    /// back at the checkpoint.
    pub(crate) fn pop_to(&mut self, checkpoint: usize) -> Option<(Slot, u64)> {
        if self.entries.len() <= checkpoint {
            return None;
        }
        self.entries
            .pop()
            .map(|entry| (entry.slot, entry.old_value))
    }

    /// Get the current number of entries in the trail.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the trail is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_new() {
        let trail = Trail::new();
        assert_eq!(trail.len(), 0);
        assert!(trail.is_empty());
    }

    #[test]
    fn test_pop_to_checkpoint() {
        let mut trail = Trail::with_capacity(8);

        trail.record_change(Slot::Climbed, 0);
        let checkpoint = trail.checkpoint();
        assert_eq!(checkpoint, 1);

        trail.record_change(Slot::Path(0), 0);
        trail.record_change(Slot::Depth, 0);
        assert_eq!(trail.len(), 3);

        // Most recent first
        assert_eq!(trail.pop_to(checkpoint), Some((Slot::Depth, 0)));
        assert_eq!(trail.pop_to(checkpoint), Some((Slot::Path(0), 0)));
        assert_eq!(trail.pop_to(checkpoint), None);
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_nested_checkpoints() {
        let mut trail = Trail::new();

        trail.record_change(Slot::Climbed, 1);
        let outer = trail.checkpoint();
        trail.record_change(Slot::Climbed, 2);
        let inner = trail.checkpoint();
        trail.record_change(Slot::Climbed, 3);

        while trail.pop_to(inner).is_some() {}
        assert_eq!(trail.len(), 2);

        while trail.pop_to(outer).is_some() {}
        assert_eq!(trail.len(), 1);
    }

    #[test]
    fn test_pop_empty() {
        let mut trail = Trail::new();
        assert_eq!(trail.pop_to(0), None);
    }
}
