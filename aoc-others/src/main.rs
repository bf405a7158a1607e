use aoc_common::report;
use aoc_others::repetition;
use clap::{Parser, Subcommand};

/// Puzzles that are not from an Advent calendar
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    puzzle: Puzzle,
}

#[derive(Debug, Subcommand)]
enum Puzzle {
    /// Steps until Kaprekar's routine repeats for one number
    Kaprekar { number: u64 },
    /// Number of a given width that takes longest to settle
    Slowest {
        #[arg(long, default_value_t = 4)]
        digits: u32,
    },
    /// Steps until the rounded logistic map repeats
    Logistic {
        #[arg(long, default_value_t = 0.5)]
        x: f64,
        #[arg(long, default_value_t = 3.0)]
        k: f64,
        /// Give up after this many steps
        #[arg(long, default_value_t = repetition::DEFAULT_LIMIT)]
        limit: usize,
    },
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_others=info");

    match Cli::parse().puzzle {
        Puzzle::Kaprekar { number } => report("Kaprekar", || {
            let r = repetition::kaprekar(number)?;
            Ok(format!("steps: {}, cycle: {:?}", r.steps, r.cycle))
        }),
        Puzzle::Slowest { digits } => report("Slowest", || {
            let (number, steps) = repetition::slowest_kaprekar(digits)?;
            Ok(format!("{number} after {steps} steps"))
        }),
        Puzzle::Logistic { x, k, limit } => report("Logistic", || {
            let r = repetition::logistic(x, k, limit)?;
            Ok(format!(
                "steps: {}, period: {}, cycle starts at {}",
                r.steps,
                r.cycle.len(),
                r.cycle.first().map_or("-", String::as_str)
            ))
        }),
    }
}
