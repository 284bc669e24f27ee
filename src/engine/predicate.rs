// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Predicates: the steps of a search program.
//!
//! A program is a sequence of predicates ending in a terminal one. A
//! predicate either decides on its own (`Success`, `Failure`) or hands the
//! engine a number of alternatives, which the engine feeds back one at a
//! time through [`Predicate::retry_pred`], rewinding the climb state between
//! them.
//!
//! # Example
//!
//! Climbing with steps of 1 or 2 only. Four stairs can be climbed five ways.
//!
//! ```
//! use stair_climb::context::SearchContext;
//! use stair_climb::engine::{EngineBuilder, Predicate, PredicateResult};
//! use stair_climb::predicates::FailPredicate;
//! use stair_climb::state::{Counters, Statistics};
//!
//! #[derive(Debug)]
//! struct ShortStepPredicate;
//!
//! impl Predicate for ShortStepPredicate {
//!     fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         if ctx.at_top() {
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Choices(2)
//!         }
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         let step = choice as u8 + 1;
//!         if step as usize > ctx.remaining() {
//!             return PredicateResult::Failure;
//!         }
//!         ctx.take_step(step);
//!         PredicateResult::SuccessSamePredicate
//!     }
//! }
//!
//! let mut ctx = SearchContext::new(4);
//! let engine = EngineBuilder::new()
//!     .add(Box::new(ShortStepPredicate))
//!     .add(Statistics::counting_predicate(Counters::Combinations))
//!     .terminal(Box::new(FailPredicate))
//!     .build();
//! assert!(engine.search(&mut ctx).is_none());
//! assert_eq!(ctx.statistics.get(Counters::Combinations), 5);
//! ```

use std::fmt::Debug;

use crate::context::SearchContext;

/// What a predicate tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Move on to the next predicate in the program, at round 0.
    Success,

    /// Run this predicate again at the next round, e.g. to take another step.
    SuccessSamePredicate,

    /// Backtrack to the most recent entry that still has alternatives.
    Failure,

    /// Explore `n` alternatives through `retry_pred(round, 0..n)`.
    Choices(usize),

    /// Hand control back to the caller of [`crate::engine::SearchEngine::search`].
    Suspend,
}

/// A predicate allowed to end a program: it fails or suspends, never succeeds.
///
/// [`crate::engine::EngineBuilder::terminal`] only accepts these, so a built
/// engine cannot run off the end of its program.
pub trait TerminalPredicate: Predicate {}

/// One step of a search program.
///
/// All changes to the climb state go through [`SearchContext`], which
/// records them on the trail. Statistics are not trailed.
pub trait Predicate: Debug {
    /// Run this predicate at `round`, which counts the `SuccessSamePredicate`
    /// results that led here, starting at 0.
    ///
    /// Called at most once per round. If it returns anything other than
    /// `Choices`, the engine never calls it again for this round: backtracking
    /// into it undoes its trailed changes and keeps backtracking. State it
    /// changes before returning `Choices(n)` is kept for every alternative.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Take alternative `choice` of the `n` offered by `try_pred` for `round`.
    ///
    /// Choices are tried in order `0..n`, each starting from the state
    /// `try_pred` left. May only return `Success`, `SuccessSamePredicate` or
    /// `Failure`; the engine panics on anything else.
    ///
    /// The default panics: a predicate that never returns `Choices` is never
    /// retried.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{} offered no choices to retry", self.name());
    }

    /// Name used in trace output. Defaults to the type name.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
