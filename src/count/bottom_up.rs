// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Bottom-up dynamic programming counter.

use tracing::debug;

use super::{Count, BASE_COUNTS};
use crate::error::{require_stairs, Result};

/// Count step sequences by filling a table from the smallest staircase upward.
///
/// `table[i]` holds f(i + 1). The first three slots are seeded from the base
/// cases (only as many as fit, so n = 1 and n = 2 work too); every later slot
/// is the sum of the three before it. Linear time and space, no recursion.
pub fn count_combinations_dp_bottom_up(n: usize) -> Result<Count> {
    require_stairs(n)?;

    let mut table: Vec<Count> = Vec::with_capacity(n);
    table.extend(BASE_COUNTS.iter().take(n).map(|&c| Count::from(c)));
    for i in 3..n {
        let next = &table[i - 1] + &table[i - 2] + &table[i - 3];
        table.push(next);
    }
    debug!(stairs = n, bits = table[n - 1].bits(), "bottom-up table filled");

    // The table holds exactly n entries and n >= 1.
    Ok(table.swap_remove(n - 1))
}
