// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state.
//!
//! - `climb`: the partial step sequence, tracked on the trail
//! - `statistics`: counters incremented by predicates, not tracked on the trail

pub mod climb;
pub mod statistics;

pub use climb::ClimbState;
pub use statistics::{Counters, Statistics};
