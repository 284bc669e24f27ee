// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Errors returned by the counting and enumeration operations.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, ClimbError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClimbError {
    /// A staircase needs at least one stair.
    #[error("number of stairs must be at least 1")]
    NoStairs,

    /// A strategy refuses inputs it cannot finish in reasonable time, memory or stack depth.
    #[error("{strategy} is limited to {limit} stairs, got {stairs}")]
    TooManyStairs {
        strategy: &'static str,
        stairs: usize,
        limit: usize,
    },
}

/// Reject an empty staircase.
pub(crate) fn require_stairs(n: usize) -> Result<()> {
    if n == 0 {
        return Err(ClimbError::NoStairs);
    }
    Ok(())
}

/// Reject an empty staircase, or one taller than `limit`.
pub(crate) fn require_stairs_within(strategy: &'static str, n: usize, limit: usize) -> Result<()> {
    require_stairs(n)?;
    if n > limit {
        return Err(ClimbError::TooManyStairs {
            strategy,
            stairs: n,
            limit,
        });
    }
    Ok(())
}
