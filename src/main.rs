// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `stairs`: time, count and list the ways to climb a staircase.
//!
//! With no arguments, times the bottom-up and top-down counters on 300
//! stairs, 10000 calls each, and prints the elapsed seconds.

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stair_climb::timing::{self, TimingConfig};
use stair_climb::{CombinationSearch, CountStrategy, EnumerationMethod};

#[derive(Parser, Debug)]
#[command(
    name = "stairs",
    version,
    about = "Count the ways to climb n stairs taking 1, 2 or 3 at a time."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Time counting strategies over repeated calls.
    Time {
        /// Number of stairs.
        #[arg(short, long, default_value_t = TimingConfig::default().stairs)]
        stairs: usize,

        /// Calls per strategy.
        #[arg(short, long, default_value_t = TimingConfig::default().repetitions)]
        repetitions: u32,

        /// Strategies to time (recursive, bottom-up, top-down, search). Defaults to bottom-up and top-down.
        #[arg(long = "strategy")]
        strategies: Vec<CountStrategy>,
    },

    /// Print the number of step sequences for a staircase.
    Count {
        stairs: usize,

        #[arg(long, default_value = "bottom-up")]
        strategy: CountStrategy,
    },

    /// Print every step sequence for a staircase, one per line.
    Enumerate {
        stairs: usize,

        /// recursive, dynamic or search. Only search streams, so it reaches far taller staircases.
        #[arg(long, default_value = "dynamic")]
        method: EnumerationMethod,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or_else(|| {
        let defaults = TimingConfig::default();
        Command::Time {
            stairs: defaults.stairs,
            repetitions: defaults.repetitions,
            strategies: Vec::new(),
        }
    });

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match command {
        Command::Time {
            stairs,
            repetitions,
            strategies,
        } => {
            let mut config = TimingConfig {
                stairs,
                repetitions,
                ..TimingConfig::default()
            };
            if !strategies.is_empty() {
                config.strategies = strategies;
            }
            for report in timing::run(&config)? {
                writeln!(out, "{}: {:.6}", report.strategy, report.elapsed.as_secs_f64())?;
            }
        }
        Command::Count { stairs, strategy } => {
            writeln!(out, "{}", strategy.count(stairs)?)?;
        }
        Command::Enumerate {
            stairs,
            method: EnumerationMethod::Search,
        } => {
            let mut total = 0u64;
            for combination in CombinationSearch::new(stairs)? {
                writeln!(out, "{:?}", combination)?;
                total += 1;
            }
            info!(stairs, total, "enumerated");
        }
        Command::Enumerate { stairs, method } => {
            let combinations = method.enumerate(stairs)?;
            for combination in &combinations {
                writeln!(out, "{:?}", combination)?;
            }
            info!(stairs, total = combinations.len(), %method, "enumerated");
        }
    }

    out.flush()?;
    Ok(())
}
