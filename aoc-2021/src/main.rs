use aoc_2021::*;
use aoc_common::{report, solve, InputArgs, Part};
use clap::{Parser, Subcommand};

/// Advent of Code 2021
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Debug, Subcommand)]
enum Day {
    /// Sonar Sweep
    Day01(InputArgs),
    /// Dive!
    Day02(InputArgs),
    /// Binary Diagnostic
    Day03(InputArgs),
    /// Giant Squid
    Day04(InputArgs),
    /// Hydrothermal Venture
    Day05(InputArgs),
    /// Lanternfish
    Day06 {
        #[command(flatten)]
        input: InputArgs,
        /// Days to simulate for the first part
        #[arg(long, default_value_t = day06::DEFAULT_DAYS)]
        days: usize,
    },
    /// The Treachery of Whales
    Day07(InputArgs),
    /// Seven Segment Search
    Day08(InputArgs),
    /// Smoke Basin
    Day09(InputArgs),
    /// Syntax Scoring
    Day10(InputArgs),
    /// Dumbo Octopus
    Day11(InputArgs),
    /// Passage Pathing
    Day12(InputArgs),
    /// Snailfish
    Day18(InputArgs),
    /// Dirac Dice
    Day21(InputArgs),
    /// Reactor Reboot
    Day22 {
        #[command(flatten)]
        input: InputArgs,
        /// Split the full reboot into slabs across threads
        #[arg(long)]
        parallel: bool,
    },
    /// Amphipod
    Day23(InputArgs),
    /// Arithmetic Logic Unit
    Day24(InputArgs),
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_2021=info");

    match Cli::parse().day {
        Day::Day01(args) => solve(&args, &[day01::part1, day01::part2]),
        Day::Day02(args) => solve(&args, &[day02::part1, day02::part2]),
        Day::Day03(args) => solve(&args, &[day03::part1, day03::part2]),
        Day::Day04(args) => solve(&args, &[day04::part1, day04::part2]),
        Day::Day05(args) => solve(&args, &[day05::part1, day05::part2]),
        Day::Day06 { input, days } => {
            let text = input.read()?;
            report("Solution 1", || day06::part1(&text, days))?;
            report("Solution 2", || day06::part2(&text))
        }
        Day::Day07(args) => solve(&args, &[day07::part1, day07::part2]),
        Day::Day08(args) => solve(&args, &[day08::part1, day08::part2]),
        Day::Day09(args) => solve(&args, &[day09::part1, day09::part2]),
        Day::Day10(args) => solve(&args, &[day10::part1, day10::part2]),
        Day::Day11(args) => solve(&args, &[day11::part1, day11::part2]),
        Day::Day12(args) => solve(&args, &[day12::part1, day12::part2]),
        Day::Day18(args) => solve(&args, &[day18::part1, day18::part2]),
        Day::Day21(args) => solve(&args, &[day21::part1, day21::part2]),
        Day::Day22 { input, parallel } => {
            let full: Part = if parallel { day22::part2_parallel } else { day22::part2 };
            solve(&input, &[day22::part1, full])
        }
        Day::Day23(args) => solve(&args, &[day23::part1, day23::part2]),
        Day::Day24(args) => solve(&args, &[day24::part1, day24::part2]),
    }
}
