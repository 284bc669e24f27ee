// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The partial step sequence explored by the search.

use crate::enumerate::Combination;
use crate::trail::Slot;

/// Mutable climb state.
///
/// Every field is addressable as a [`Slot`] and holds a value that fits in a
/// u64, so changes can be recorded on the trail and undone on backtrack.
/// Writes go through [`crate::context::SearchContext`], which does the
/// recording.
#[derive(Debug, Clone)]
pub struct ClimbState {
    /// Height reached by the steps taken so far.
    climbed: u64,

    /// Number of steps taken so far.
    depth: u64,

    /// Steps taken, valid in `path[..depth]`.
    ///
    /// Sized to the number of stairs, the longest possible sequence (all ones).
    path: Vec<u8>,
}

impl ClimbState {
    /// Create the state for a staircase of `stairs` stairs, with no steps taken.
    pub fn new(stairs: usize) -> Self {
        Self {
            climbed: 0,
            depth: 0,
            path: vec![0; stairs],
        }
    }

    /// Height reached so far.
    pub fn climbed(&self) -> usize {
        self.climbed as usize
    }

    /// Number of steps taken so far.
    pub fn depth(&self) -> usize {
        self.depth as usize
    }

    /// The steps taken so far, in order.
    pub fn steps(&self) -> &[u8] {
        &self.path[..self.depth()]
    }

    /// Copy the steps taken so far into a new combination.
    pub fn to_combination(&self) -> Combination {
        self.steps().to_vec()
    }

    pub(crate) fn get(&self, slot: Slot) -> u64 {
        match slot {
            Slot::Climbed => self.climbed,
            Slot::Depth => self.depth,
            Slot::Path(i) => self.path[i] as u64,
        }
    }

    pub(crate) fn put(&mut self, slot: Slot, value: u64) {
        match slot {
            Slot::Climbed => self.climbed = value,
            Slot::Depth => self.depth = value,
            // Steps are 1..=3, so the narrowing is lossless.
            Slot::Path(i) => self.path[i] = value as u8,
        }
    }
}
