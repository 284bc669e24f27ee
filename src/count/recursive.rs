// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unmemoized recursive counter.

use super::{base_count, Count};
use crate::error::{require_stairs_within, Result};

/// Largest staircase the recursive counter accepts.
///
/// The call tree has f(n) leaves, so n = 40 already means about 2.3e10 calls.
pub const MAX_RECURSIVE_STAIRS: usize = 40;

/// Count step sequences by evaluating the recurrence without memoization.
///
/// Exponential time; kept as a baseline to check the other counters against.
pub fn count_combinations_recursive(n: usize) -> Result<Count> {
    require_stairs_within("recursive counter", n, MAX_RECURSIVE_STAIRS)?;
    Ok(count(n))
}

fn count(n: usize) -> Count {
    match base_count(n) {
        Some(c) => c,
        None => count(n - 1) + count(n - 2) + count(n - 3),
    }
}
