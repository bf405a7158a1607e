use aoc_2018::*;
use aoc_common::{solve, InputArgs};
use clap::{Parser, Subcommand};

/// Advent of Code 2018
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Debug, Subcommand)]
enum Day {
    /// Chronal Calibration
    Day01(InputArgs),
    /// Inventory Management System
    Day02 {
        #[command(flatten)]
        input: InputArgs,
        /// Compare every pair of box ids instead of bucketing by masked id
        #[arg(long)]
        pairwise: bool,
    },
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_2018=info");

    match Cli::parse().day {
        Day::Day01(args) => solve(&args, &[day01::part1, day01::part2]),
        Day::Day02 { input, pairwise } => {
            let part2 = if pairwise {
                day02::part2_pairwise
            } else {
                day02::part2
            };
            solve(&input, &[day02::part1, part2])
        }
    }
}
