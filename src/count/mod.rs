// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting the ways to climb a staircase.
//!
//! All three counters implement the same recurrence
//!
//! ```text
//! f(1) = 1, f(2) = 2, f(3) = 4
//! f(n) = f(n-1) + f(n-2) + f(n-3)
//! ```
//!
//! and differ only in how they evaluate it:
//!
//! - [`count_combinations_recursive`]: plain recursion, exponential, a correctness baseline
//! - [`count_combinations_dp_bottom_up`]: iterative table filling, the reference implementation
//! - [`count_combinations_dp_top_down`]: recursion with a lazily filled table
//!
//! Counts are [`BigUint`] since f(300) is roughly 10^79.

pub mod bottom_up;
pub mod recursive;
pub mod top_down;

pub use bottom_up::count_combinations_dp_bottom_up;
pub use recursive::{count_combinations_recursive, MAX_RECURSIVE_STAIRS};
pub use top_down::{count_combinations_dp_top_down, MAX_TOP_DOWN_STAIRS};

use num_bigint::BigUint;

/// Number of step sequences for a staircase.
pub type Count = BigUint;

/// f(1), f(2), f(3).
pub const BASE_COUNTS: [u32; 3] = [1, 2, 4];

/// The literal count for n in {1, 2, 3}, `None` otherwise.
pub(crate) fn base_count(n: usize) -> Option<Count> {
    match n {
        1..=3 => Some(Count::from(BASE_COUNTS[n - 1])),
        _ => None,
    }
}
