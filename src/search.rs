// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking enumeration on top of the predicate engine.
//!
//! Unlike the enumerators in [`crate::enumerate`], the search keeps a single
//! partial sequence and undoes steps on the trail, so memory stays
//! proportional to the number of stairs however many combinations there are.

use tracing::debug;

use crate::context::SearchContext;
use crate::count::Count;
use crate::engine::{EngineBuilder, SearchEngine};
use crate::enumerate::{Combination, MAX_ENUMERATED_STAIRS};
use crate::error::{require_stairs_within, Result};
use crate::predicates::{FailPredicate, StepPredicate, SuspendPredicate};
use crate::state::{Counters, Statistics};

/// Largest staircase [`CombinationSearch`] accepts.
///
/// The climb state, the trail and the engine stack each grow linearly with
/// the number of stairs, about 10 MB in total at this size.
pub const MAX_SEARCH_STAIRS: usize = 100_000;

/// Largest staircase [`count_combinations_search`] accepts.
///
/// Every combination is visited once, so the cost grows like the count itself.
pub const MAX_SEARCH_COUNT_STAIRS: usize = 30;

/// Lazily yields every step sequence for a staircase, in lexicographic order.
///
/// The engine suspends after each complete sequence; `next` resumes it.
///
/// ```
/// use stair_climb::search::CombinationSearch;
///
/// let combinations: Vec<_> = CombinationSearch::new(3).unwrap().collect();
/// assert_eq!(combinations, vec![vec![1, 1, 1], vec![1, 2], vec![2, 1], vec![3]]);
/// ```
#[derive(Debug)]
pub struct CombinationSearch {
    ctx: SearchContext,
    engine: Option<SearchEngine>,
}

impl CombinationSearch {
    /// Prepare a search over `n` stairs. Nothing runs until the first `next`.
    ///
    /// Rejects staircases taller than [`MAX_SEARCH_STAIRS`].
    pub fn new(n: usize) -> Result<Self> {
        require_stairs_within("combination search", n, MAX_SEARCH_STAIRS)?;
        let engine = EngineBuilder::new()
            .add(Box::new(StepPredicate))
            .add(Statistics::counting_predicate(Counters::Combinations))
            .terminal(Box::new(SuspendPredicate))
            .build();
        Ok(Self {
            ctx: SearchContext::new(n),
            engine: Some(engine),
        })
    }

    /// Counters accumulated so far.
    pub fn statistics(&self) -> &Statistics {
        &self.ctx.statistics
    }
}

impl Iterator for CombinationSearch {
    type Item = Combination;

    fn next(&mut self) -> Option<Combination> {
        let engine = self.engine.take()?;
        self.engine = engine.search(&mut self.ctx);
        if self.engine.is_none() {
            debug!(
                stairs = self.ctx.stairs(),
                combinations = self.ctx.statistics.get(Counters::Combinations),
                overshoots = self.ctx.statistics.get(Counters::Overshoots),
                "combination search exhausted"
            );
            return None;
        }
        Some(self.ctx.current_combination())
    }
}

/// List every step sequence for `n` stairs by backtracking search.
///
/// Same set as [`crate::enumerate::enumerate_combinations_dp`], in
/// lexicographic order.
pub fn enumerate_combinations_search(n: usize) -> Result<Vec<Combination>> {
    require_stairs_within("search enumerator", n, MAX_ENUMERATED_STAIRS)?;
    Ok(CombinationSearch::new(n)?.collect())
}

/// Count step sequences by running the search to exhaustion.
pub fn count_combinations_search(n: usize) -> Result<Count> {
    require_stairs_within("search counter", n, MAX_SEARCH_COUNT_STAIRS)?;

    let mut ctx = SearchContext::new(n);
    let engine = EngineBuilder::new()
        .add(Box::new(StepPredicate))
        .add(Statistics::counting_predicate(Counters::Combinations))
        .terminal(Box::new(FailPredicate))
        .build();
    // A FailPredicate program never suspends.
    let _ = engine.search(&mut ctx);

    Ok(Count::from(ctx.statistics.get(Counters::Combinations)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::count::count_combinations_dp_bottom_up;
    use crate::error::ClimbError;

    #[test]
    fn test_search_short_staircases() {
        assert_eq!(enumerate_combinations_search(1).unwrap(), vec![vec![1]]);
        assert_eq!(
            enumerate_combinations_search(2).unwrap(),
            vec![vec![1, 1], vec![2]]
        );
    }

    #[test]
    fn test_search_four_stairs_lexicographic() {
        let combinations = enumerate_combinations_search(4).unwrap();
        assert_eq!(
            combinations,
            vec![
                vec![1, 1, 1, 1],
                vec![1, 1, 2],
                vec![1, 2, 1],
                vec![1, 3],
                vec![2, 1, 1],
                vec![2, 2],
                vec![3, 1],
            ]
        );
    }

    #[test]
    fn test_search_statistics() {
        let mut search = CombinationSearch::new(4).unwrap();
        assert_eq!(search.by_ref().count(), 7);
        assert_eq!(search.statistics().get(Counters::Combinations), 7);
        assert!(search.statistics().get(Counters::Overshoots) > 0);

        // Exhausted searches stay exhausted.
        assert_eq!(search.next(), None);
    }

    #[test]
    fn test_search_is_lazy_for_tall_staircases() {
        // 300 stairs: far too many combinations to list, but the first few are cheap.
        let first: Vec<_> = CombinationSearch::new(300).unwrap().take(2).collect();
        assert_eq!(first[0], vec![1; 300]);
        let mut second = vec![1; 298];
        second.push(2);
        assert_eq!(first[1], second);
    }

    #[test]
    fn test_count_search_matches_bottom_up() {
        for n in 1..=15 {
            assert_eq!(
                count_combinations_search(n).unwrap(),
                count_combinations_dp_bottom_up(n).unwrap(),
                "n={}",
                n
            );
        }
    }

    #[test]
    fn test_search_rejects_zero() {
        assert!(matches!(CombinationSearch::new(0), Err(ClimbError::NoStairs)));
        assert_eq!(count_combinations_search(0), Err(ClimbError::NoStairs));
        assert!(matches!(
            count_combinations_search(MAX_SEARCH_COUNT_STAIRS + 1),
            Err(ClimbError::TooManyStairs { .. })
        ));
    }

    #[test]
    fn test_search_rejects_huge_staircases() {
        assert_eq!(
            CombinationSearch::new(MAX_SEARCH_STAIRS + 1).unwrap_err(),
            ClimbError::TooManyStairs {
                strategy: "combination search",
                stairs: MAX_SEARCH_STAIRS + 1,
                limit: MAX_SEARCH_STAIRS,
            }
        );
        // Rejected before anything is allocated.
        assert!(matches!(
            CombinationSearch::new(usize::MAX / 2),
            Err(ClimbError::TooManyStairs { .. })
        ));
    }

    #[test]
    fn test_search_tallest_accepted_staircase() {
        let first = CombinationSearch::new(MAX_SEARCH_STAIRS).unwrap().next().unwrap();
        assert_eq!(first.len(), MAX_SEARCH_STAIRS);
        assert!(first.iter().all(|&step| step == 1));
    }
}
