// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Top-down memoized counter.

use tracing::debug;

use super::{base_count, Count};
use crate::error::{require_stairs_within, Result};

/// Largest staircase [`count_combinations_dp_top_down`] accepts.
///
/// The first lookup recurses once per stair before any slot is filled, so
/// the call depth is `n`. This keeps it well inside a 2 MiB thread stack.
pub const MAX_TOP_DOWN_STAIRS: usize = 2_000;

/// Count step sequences by recursion over a lazily filled table.
///
/// Slot `k - 1` holds f(k) once computed; `None` marks a slot that has not
/// been computed yet. Each slot is written at most once.
///
/// Taller staircases than [`MAX_TOP_DOWN_STAIRS`] are rejected; use
/// [`super::count_combinations_dp_bottom_up`], which does not recurse.
pub fn count_combinations_dp_top_down(n: usize) -> Result<Count> {
    require_stairs_within("top-down counter", n, MAX_TOP_DOWN_STAIRS)?;

    let mut memo = Memo::new(n);
    let count = memo.get(n);
    debug!(stairs = n, computed = memo.computed, "top-down table filled");
    Ok(count)
}

struct Memo {
    slots: Vec<Option<Count>>,
    /// Number of slots filled, at most `slots.len()`.
    computed: usize,
}

impl Memo {
    fn new(n: usize) -> Self {
        Self {
            slots: vec![None; n],
            computed: 0,
        }
    }

    fn get(&mut self, k: usize) -> Count {
        if let Some(count) = &self.slots[k - 1] {
            return count.clone();
        }
        let count = match base_count(k) {
            Some(c) => c,
            None => self.get(k - 1) + self.get(k - 2) + self.get(k - 3),
        };
        self.slots[k - 1] = Some(count.clone());
        self.computed += 1;
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_combinations_dp_bottom_up;
    use crate::error::ClimbError;

    #[test]
    fn test_base_cases() {
        assert_eq!(count_combinations_dp_top_down(1).unwrap(), Count::from(1u32));
        assert_eq!(count_combinations_dp_top_down(2).unwrap(), Count::from(2u32));
        assert_eq!(count_combinations_dp_top_down(3).unwrap(), Count::from(4u32));
    }

    #[test]
    fn test_each_slot_computed_once() {
        let mut memo = Memo::new(30);
        memo.get(30);
        assert_eq!(memo.computed, 30);
        assert!(memo.slots.iter().all(Option::is_some));

        // A second lookup is served from the table.
        memo.get(30);
        assert_eq!(memo.computed, 30);
    }

    #[test]
    fn test_matches_bottom_up_at_300() {
        assert_eq!(
            count_combinations_dp_top_down(300).unwrap(),
            count_combinations_dp_bottom_up(300).unwrap()
        );
    }

    #[test]
    fn test_zero_stairs() {
        assert_eq!(count_combinations_dp_top_down(0), Err(ClimbError::NoStairs));
    }

    #[test]
    fn test_tallest_accepted_staircase() {
        assert_eq!(
            count_combinations_dp_top_down(MAX_TOP_DOWN_STAIRS).unwrap(),
            count_combinations_dp_bottom_up(MAX_TOP_DOWN_STAIRS).unwrap()
        );
    }

    #[test]
    fn test_too_many_stairs() {
        assert_eq!(
            count_combinations_dp_top_down(MAX_TOP_DOWN_STAIRS + 1),
            Err(ClimbError::TooManyStairs {
                strategy: "top-down counter",
                stairs: MAX_TOP_DOWN_STAIRS + 1,
                limit: MAX_TOP_DOWN_STAIRS,
            })
        );
        // Would overflow the stack if it recursed.
        assert!(matches!(
            count_combinations_dp_top_down(100_000),
            Err(ClimbError::TooManyStairs { .. })
        ));
    }
}
