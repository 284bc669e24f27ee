// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::collections::HashSet;

use stair_climb::Combination;

/// Sum of the steps in a combination.
pub fn height(combination: &[u8]) -> usize {
    combination.iter().map(|&step| step as usize).sum()
}

/// Check that every combination climbs exactly `n` stairs with legal steps,
/// and that no combination appears twice.
pub fn assert_valid_enumeration(n: usize, combinations: &[Combination]) {
    let mut seen = HashSet::with_capacity(combinations.len());
    for combination in combinations {
        assert_eq!(height(combination), n, "{:?} does not climb {}", combination, n);
        assert!(
            combination.iter().all(|step| (1..=3).contains(step)),
            "{:?} has an illegal step",
            combination
        );
        assert!(seen.insert(combination.clone()), "{:?} listed twice", combination);
    }
}

/// The combinations as a set, for comparing enumerators that differ in order.
pub fn as_set(combinations: Vec<Combination>) -> HashSet<Combination> {
    combinations.into_iter().collect()
}
