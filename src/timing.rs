// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Repeated-invocation timing of the counting strategies.

use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::info;

use crate::error::Result;
use crate::strategy::CountStrategy;

/// What to time and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingConfig {
    pub stairs: usize,
    pub repetitions: u32,
    pub strategies: Vec<CountStrategy>,
}

impl Default for TimingConfig {
    /// Both table-based counters on 300 stairs, 10000 times each.
    fn default() -> Self {
        Self {
            stairs: 300,
            repetitions: 10_000,
            strategies: vec![CountStrategy::BottomUp, CountStrategy::TopDown],
        }
    }
}

/// Elapsed wall time for one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingReport {
    pub strategy: CountStrategy,
    pub stairs: usize,
    pub repetitions: u32,
    pub elapsed: Duration,
}

/// Call `strategy` on `n` stairs `repetitions` times and return the total time.
///
/// Fails before timing anything if the strategy rejects `n`.
pub fn time_strategy(strategy: CountStrategy, n: usize, repetitions: u32) -> Result<Duration> {
    strategy.count(n)?;

    let start = Instant::now();
    for _ in 0..repetitions {
        black_box(strategy.count(black_box(n))?);
    }
    Ok(start.elapsed())
}

/// Time every strategy in `config`, in order.
pub fn run(config: &TimingConfig) -> Result<Vec<TimingReport>> {
    config
        .strategies
        .iter()
        .map(|&strategy| {
            info!(%strategy, stairs = config.stairs, repetitions = config.repetitions, "timing");
            let elapsed = time_strategy(strategy, config.stairs, config.repetitions)?;
            Ok(TimingReport {
                strategy,
                stairs: config.stairs,
                repetitions: config.repetitions,
                elapsed,
            })
        })
        .collect()
}
