// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used by the backtracking enumerator.
//! Each predicate represents a choice point in the search space.
//!
//! # Organization
//!
//! - `step`: StepPredicate, choosing one step per round until the top is reached
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`
//!
//! Counting predicates live with the counters in [`crate::state::statistics`].

pub mod step;

pub use step::StepPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. As the terminal
/// predicate it makes the engine visit every alternative, which is how
/// [`crate::search::count_combinations_search`] reaches every combination.
///
/// # Example
///
/// ```
/// use stair_climb::context::SearchContext;
/// use stair_climb::engine::EngineBuilder;
/// use stair_climb::predicates::{FailPredicate, StepPredicate};
/// use stair_climb::state::{Counters, Statistics};
///
/// let mut ctx = SearchContext::new(4);
/// let engine = EngineBuilder::new()
///     .add(Box::new(StepPredicate))
///     .add(Statistics::counting_predicate(Counters::Combinations))
///     .terminal(Box::new(FailPredicate))
///     .build();
///
/// // Engine will exhaust all step choices then fail
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// assert_eq!(ctx.statistics.get(Counters::Combinations), 7);
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Hands control back to the caller with the search state intact. Resuming
/// the engine backtracks out of it into the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        // Suspend predicate never retries
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
