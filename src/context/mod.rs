// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context for the backtracking enumerator.
//!
//! The SearchContext is the core data structure passed to every predicate. It combines:
//! - the target: the number of stairs, fixed at creation
//! - the trail and the climb state it protects
//! - statistics, which survive backtracking
//!
//! Contexts share nothing, so independent searches can run side by side.

use crate::enumerate::Combination;
use crate::state::{ClimbState, Statistics};
use crate::trail::{Slot, Trail};

/// Search context combining the target and the mutable search state.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     stairs: usize,             // Immutable target
///     trail: Trail,              // Mutable, owned
///     state: ClimbState,         // Mutable, owned, restored from the trail
///     statistics: Statistics,    // Mutable, owned, never restored
/// }
/// ```
///
/// All writes to `state` go through methods on the context that record the
/// old value first, which is what makes [`SearchContext::rewind_to`] exact.
#[derive(Debug)]
pub struct SearchContext {
    stairs: usize,
    /// Trail for O(1) backtracking
    pub trail: Trail,
    state: ClimbState,
    /// Counters incremented during search
    pub statistics: Statistics,
}

impl SearchContext {
    /// Create a context for climbing `stairs` stairs.
    ///
    /// Allocates state linear in `stairs`. Callers taking user input bound it
    /// first, as [`crate::search::CombinationSearch::new`] does.
    pub fn new(stairs: usize) -> Self {
        Self {
            stairs,
            // At most three changes per step, and at most `stairs` steps.
            trail: Trail::with_capacity(stairs.saturating_mul(3)),
            state: ClimbState::new(stairs),
            statistics: Statistics::new(),
        }
    }

    /// The number of stairs to climb.
    pub fn stairs(&self) -> usize {
        self.stairs
    }

    /// Read-only view of the climb state.
    pub fn state(&self) -> &ClimbState {
        &self.state
    }

    /// Stairs left above the current height.
    pub fn remaining(&self) -> usize {
        self.stairs.saturating_sub(self.state.climbed())
    }

    /// Whether the steps taken so far reach the top exactly.
    pub fn at_top(&self) -> bool {
        self.state.climbed() == self.stairs
    }

    /// Take one step (trail-tracked).
    ///
    /// # Panics
    ///
    /// Panics if the step passes the top stair. Predicates check
    /// [`SearchContext::remaining`] first.
    pub fn take_step(&mut self, step: u8) {
        assert!(
            step as usize <= self.remaining(),
            "Step {} overshoots: only {} stairs remain",
            step,
            self.remaining()
        );
        let depth = self.state.depth();
        self.set(Slot::Path(depth), step as u64);
        self.set(Slot::Depth, depth as u64 + 1);
        self.set(Slot::Climbed, (self.state.climbed() + step as usize) as u64);
    }

    /// The steps taken so far as a new combination.
    pub fn current_combination(&self) -> Combination {
        self.state.to_combination()
    }

    /// Undo every change recorded since `checkpoint`.
    pub fn rewind_to(&mut self, checkpoint: usize) {
        while let Some((slot, old_value)) = self.trail.pop_to(checkpoint) {
            self.state.put(slot, old_value);
        }
    }

    /// Set a slot, recording its old value on the trail.
    fn set(&mut self, slot: Slot, value: u64) {
        let old_value = self.state.get(slot);
        self.trail.record_change(slot, old_value);
        self.state.put(slot, value);
    }
}
