// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive enumerator.

use super::{base_enumeration, combine, Combination, MAX_ENUMERATED_STAIRS};
use crate::error::{require_stairs_within, Result};

/// List every step sequence for `n` stairs, recomputing smaller enumerations.
pub fn enumerate_combinations_recursive(n: usize) -> Result<Vec<Combination>> {
    require_stairs_within("recursive enumerator", n, MAX_ENUMERATED_STAIRS)?;
    Ok(enumerate(n))
}

fn enumerate(n: usize) -> Vec<Combination> {
    if let Some(base) = base_enumeration(n) {
        return base;
    }
    combine([&enumerate(n - 1), &enumerate(n - 2), &enumerate(n - 3)])
}
