// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! StepPredicate - chooses the steps of a combination one round at a time.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::enumerate::STEP_SIZES;
use crate::state::Counters;

/// StepPredicate picks step `round` of the sequence.
///
/// On each round, if the steps so far reach the top exactly the predicate
/// succeeds and the engine moves on. Otherwise it offers one choice per step
/// size:
/// - Choice 0 → step 1
/// - Choice 1 → step 2
/// - Choice 2 → step 3
///
/// A step that would pass the top stair is counted as an overshoot and
/// fails. Smaller steps are tried first, so complete sequences are reached in
/// lexicographic order.
#[derive(Debug)]
pub struct StepPredicate;

impl Predicate for StepPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if ctx.at_top() {
            PredicateResult::Success
        } else {
            PredicateResult::Choices(STEP_SIZES.len())
        }
    }

    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        _round: usize,
        choice: usize,
    ) -> PredicateResult {
        let step = STEP_SIZES[choice];
        if step as usize > ctx.remaining() {
            ctx.statistics.increment_counter(Counters::Overshoots);
            return PredicateResult::Failure;
        }
        ctx.take_step(step);
        PredicateResult::SuccessSamePredicate
    }

    fn name(&self) -> &str {
        "Step"
    }
}
