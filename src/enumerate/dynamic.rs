// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dynamic-programming enumerator.

use tracing::debug;

use super::{base_enumeration, combine, Combination, MAX_ENUMERATED_STAIRS};
use crate::error::{require_stairs_within, Result};

/// List every step sequence for `n` stairs, reusing smaller enumerations from a table.
///
/// `table[i]` holds the enumeration for `i + 1` stairs. Every prefix stays in
/// the table until the call returns, so peak memory is the total number of
/// combinations over all staircases up to `n`.
pub fn enumerate_combinations_dp(n: usize) -> Result<Vec<Combination>> {
    require_stairs_within("dynamic enumerator", n, MAX_ENUMERATED_STAIRS)?;

    let mut table: Vec<Vec<Combination>> = (1..=n.min(3)).filter_map(base_enumeration).collect();
    for j in 3..n {
        let next = combine([&table[j - 1], &table[j - 2], &table[j - 3]]);
        table.push(next);
    }
    debug!(
        stairs = n,
        stored = table.iter().map(Vec::len).sum::<usize>(),
        "enumeration table filled"
    );

    Ok(table.swap_remove(n - 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enumerate::enumerate_combinations_recursive;
    use crate::error::ClimbError;

    #[test]
    fn test_short_staircases() {
        assert_eq!(enumerate_combinations_dp(1).unwrap(), vec![vec![1]]);
        assert_eq!(enumerate_combinations_dp(2).unwrap(), vec![vec![1, 1], vec![2]]);
        assert_eq!(
            enumerate_combinations_dp(3).unwrap(),
            vec![vec![1, 1, 1], vec![2, 1], vec![1, 2], vec![3]]
        );
    }

    #[test]
    fn test_same_order_as_recursive() {
        for n in 1..=12 {
            assert_eq!(
                enumerate_combinations_dp(n).unwrap(),
                enumerate_combinations_recursive(n).unwrap(),
                "n={}",
                n
            );
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(enumerate_combinations_dp(0), Err(ClimbError::NoStairs));
        assert!(matches!(
            enumerate_combinations_dp(MAX_ENUMERATED_STAIRS + 1),
            Err(ClimbError::TooManyStairs { .. })
        ));
    }
}
