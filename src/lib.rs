// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting and enumerating the ways to climb a staircase.
//!
//! A staircase of `n` stairs is climbed taking 1, 2 or 3 stairs per step. The
//! number of distinct step sequences follows a tribonacci-like recurrence:
//!
//! ```text
//! f(1) = 1    (1)
//! f(2) = 2    (1,1) (2)
//! f(3) = 4    (1,1,1) (2,1) (1,2) (3)
//! f(n) = f(n-1) + f(n-2) + f(n-3)
//! ```
//!
//! # Counting
//!
//! [`count`] evaluates the recurrence three ways: plain recursion, bottom-up
//! table filling and top-down memoization. All return arbitrary precision
//! counts, so f(300) (about 10^79) is exact.
//!
//! # Enumeration
//!
//! [`enumerate`] materializes every sequence, either recursively or from a
//! table of smaller enumerations.
//!
//! # Backtracking Search
//!
//! [`search`] streams sequences one at a time with memory proportional to `n`.
//! It runs on a small non-deterministic engine:
//!
//! - [`engine`]: predicates tried in sequence, with choice points and suspension
//! - [`trail`]: O(1) undo of state changes on backtrack
//! - [`context`]: the target, the trail, and the climb state it protects
//! - [`predicates`]: `StepPredicate` plus the built-in terminal predicates
//!
//! # Errors
//!
//! Every operation rejects `n = 0`. Every strategy except the bottom-up
//! counter also has an upper limit, set by running time, memory or recursion
//! depth; see [`ClimbError`].

pub mod context;
pub mod count;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod predicates;
pub mod search;
pub mod state;
pub mod strategy;
pub mod timing;
pub mod trail;

// Re-export commonly used types
pub use count::{
    count_combinations_dp_bottom_up, count_combinations_dp_top_down,
    count_combinations_recursive, Count,
};
pub use enumerate::{enumerate_combinations_dp, enumerate_combinations_recursive, Combination};
pub use error::{ClimbError, Result};
pub use search::{count_combinations_search, enumerate_combinations_search, CombinationSearch};
pub use strategy::{CountStrategy, EnumerationMethod};
