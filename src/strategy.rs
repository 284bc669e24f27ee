// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Named strategies, so callers such as the CLI can pick an algorithm at run time.

use strum_macros::{Display, EnumIter, EnumString};

use crate::count::{
    count_combinations_dp_bottom_up, count_combinations_dp_top_down,
    count_combinations_recursive, Count,
};
use crate::enumerate::{enumerate_combinations_dp, enumerate_combinations_recursive, Combination};
use crate::error::Result;
use crate::search::{count_combinations_search, enumerate_combinations_search};

/// A way of counting step sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum CountStrategy {
    Recursive,
    BottomUp,
    TopDown,
    Search,
}

impl CountStrategy {
    pub fn count(self, n: usize) -> Result<Count> {
        match self {
            CountStrategy::Recursive => count_combinations_recursive(n),
            CountStrategy::BottomUp => count_combinations_dp_bottom_up(n),
            CountStrategy::TopDown => count_combinations_dp_top_down(n),
            CountStrategy::Search => count_combinations_search(n),
        }
    }
}

/// A way of listing step sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum EnumerationMethod {
    Recursive,
    Dynamic,
    Search,
}

impl EnumerationMethod {
    pub fn enumerate(self, n: usize) -> Result<Vec<Combination>> {
        match self {
            EnumerationMethod::Recursive => enumerate_combinations_recursive(n),
            EnumerationMethod::Dynamic => enumerate_combinations_dp(n),
            EnumerationMethod::Search => enumerate_combinations_search(n),
        }
    }
}
