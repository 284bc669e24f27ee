// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumerating the step sequences for a staircase.
//!
//! A combination for `n` stairs is built by appending 1 to every combination
//! for `n - 1`, appending 2 to every combination for `n - 2` and appending 3
//! to every combination for `n - 3`, in that order. Both enumerators here
//! produce that order; they differ in whether smaller enumerations are
//! recomputed ([`enumerate_combinations_recursive`]) or read back from a
//! table ([`enumerate_combinations_dp`]).
//!
//! The number of combinations grows like 1.84^n, so both are capped at
//! [`MAX_ENUMERATED_STAIRS`]. For larger staircases stream them with
//! [`crate::search::CombinationSearch`].

pub mod dynamic;
pub mod recursive;

pub use dynamic::enumerate_combinations_dp;
pub use recursive::enumerate_combinations_recursive;

/// The step sizes that can be taken at once.
pub const STEP_SIZES: [u8; 3] = [1, 2, 3];

/// Largest staircase the materializing enumerators accept (2,555,757 combinations).
pub const MAX_ENUMERATED_STAIRS: usize = 25;

/// An ordered sequence of steps whose sum is the number of stairs.
pub type Combination = Vec<u8>;

/// Literal enumerations for n in {1, 2, 3}, `None` otherwise.
pub(crate) fn base_enumeration(n: usize) -> Option<Vec<Combination>> {
    match n {
        1 => Some(vec![vec![1]]),
        2 => Some(vec![vec![1, 1], vec![2]]),
        3 => Some(vec![vec![1, 1, 1], vec![2, 1], vec![1, 2], vec![3]]),
        _ => None,
    }
}

/// Concatenate the three smaller enumerations, each with its step appended.
///
/// `smaller[i]` is the enumeration for `n - 1 - i`.
pub(crate) fn combine(smaller: [&[Combination]; 3]) -> Vec<Combination> {
    let total = smaller.iter().map(|s| s.len()).sum();
    let mut result = Vec::with_capacity(total);
    for (source, &step) in smaller.iter().zip(STEP_SIZES.iter()) {
        result.extend(source.iter().map(|combination| {
            let mut extended = Vec::with_capacity(combination.len() + 1);
            extended.extend_from_slice(combination);
            extended.push(step);
            extended
        }));
    }
    result
}
