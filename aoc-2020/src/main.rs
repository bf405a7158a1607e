use aoc_2020::*;
use aoc_common::{report, solve, InputArgs};
use clap::{Parser, Subcommand};

/// Advent of Code 2020
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Debug, Subcommand)]
enum Day {
    /// Report Repair
    Day01 {
        #[command(flatten)]
        input: InputArgs,
        /// Also run the exhaustive search over this many entries
        #[arg(long)]
        brute_force: Option<usize>,
    },
    /// Password Philosophy
    Day02(InputArgs),
    /// Toboggan Trajectory
    Day03(InputArgs),
    /// Passport Processing
    Day04(InputArgs),
    /// Binary Boarding
    Day05(InputArgs),
    /// Custom Customs
    Day06(InputArgs),
    /// Handy Haversacks
    Day07(InputArgs),
    /// Handheld Halting
    Day08(InputArgs),
    /// Encoding Error
    Day09 {
        #[command(flatten)]
        input: InputArgs,
        /// Length of the XMAS preamble
        #[arg(long, default_value_t = day09::DEFAULT_PREAMBLE)]
        preamble: usize,
    },
    /// Adapter Array
    Day10(InputArgs),
    /// Seating System
    Day11(InputArgs),
    /// Rain Risk
    Day12(InputArgs),
    /// Shuttle Search
    Day13(InputArgs),
    /// Docking Data
    Day14(InputArgs),
    /// Rambunctious Recitation
    Day15(InputArgs),
    /// Ticket Translation
    Day16(InputArgs),
    /// Conway Cubes
    Day17 {
        #[command(flatten)]
        input: InputArgs,
        /// Only simulate a pocket dimension with this many axes
        #[arg(long)]
        dimension: Option<usize>,
        /// Boot cycles to simulate
        #[arg(long, default_value_t = day17::DEFAULT_CYCLES)]
        cycles: usize,
    },
    /// Operation Order
    Day18(InputArgs),
    /// Monster Messages
    Day19(InputArgs),
    /// Jurassic Jigsaw
    Day20(InputArgs),
    /// Allergen Assessment
    Day21(InputArgs),
    /// Crab Combat
    Day22(InputArgs),
    /// Crab Cups
    Day23 {
        #[command(flatten)]
        input: InputArgs,
        /// Moves to play with the labelled cups
        #[arg(long, default_value_t = day23::DEFAULT_MOVES)]
        moves: usize,
        /// Cups in the circle for the long game
        #[arg(long, default_value_t = day23::DEFAULT_TOTAL)]
        total: usize,
    },
    /// Lobby Layout
    Day24(InputArgs),
    /// Combo Breaker
    Day25(InputArgs),
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_2020=info");

    match Cli::parse().day {
        Day::Day01 { input, brute_force } => {
            solve(&input, &[day01::part1, day01::part2])?;
            if let Some(k) = brute_force {
                let text = input.read()?;
                report("Brute force", || day01::brute_force(&text, k))?;
            }
            Ok(())
        }
        Day::Day02(args) => solve(&args, &[day02::part1, day02::part2]),
        Day::Day03(args) => solve(&args, &[day03::part1, day03::part2]),
        Day::Day04(args) => solve(&args, &[day04::part1, day04::part2]),
        Day::Day05(args) => solve(&args, &[day05::part1, day05::part2]),
        Day::Day06(args) => solve(&args, &[day06::part1, day06::part2]),
        Day::Day07(args) => solve(&args, &[day07::part1, day07::part2]),
        Day::Day08(args) => solve(&args, &[day08::part1, day08::part2]),
        Day::Day09 { input, preamble } => {
            let text = input.read()?;
            report("Solution 1", || day09::part1(&text, preamble))?;
            report("Solution 2", || day09::part2(&text, preamble))
        }
        Day::Day10(args) => solve(&args, &[day10::part1, day10::part2]),
        Day::Day11(args) => solve(&args, &[day11::part1, day11::part2]),
        Day::Day12(args) => solve(&args, &[day12::part1, day12::part2]),
        Day::Day13(args) => solve(&args, &[day13::part1, day13::part2]),
        Day::Day14(args) => solve(&args, &[day14::part1, day14::part2]),
        Day::Day15(args) => solve(&args, &[day15::part1, day15::part2]),
        Day::Day16(args) => solve(&args, &[day16::part1, day16::part2]),
        Day::Day17 {
            input,
            dimension,
            cycles,
        } => {
            let text = input.read()?;
            match dimension {
                Some(d) => report("Solution", || day17::active_after(&text, d, cycles)),
                None => {
                    report("Solution 1", || day17::active_after(&text, 3, cycles))?;
                    report("Solution 2", || day17::active_after(&text, 4, cycles))
                }
            }
        }
        Day::Day18(args) => solve(&args, &[day18::part1, day18::part2]),
        Day::Day19(args) => solve(&args, &[day19::part1, day19::part2]),
        Day::Day20(args) => solve(&args, &[day20::part1, day20::part2]),
        Day::Day21(args) => solve(&args, &[day21::part1, day21::part2]),
        Day::Day22(args) => solve(&args, &[day22::part1, day22::part2]),
        Day::Day23 {
            input,
            moves,
            total,
        } => {
            let text = input.read()?;
            report("Solution 1", || day23::part1(&text, moves))?;
            report("Solution 2", || day23::part2(&text, total))
        }
        Day::Day24(args) => solve(&args, &[day24::part1, day24::part2]),
        Day::Day25(args) => solve(&args, &[day25::part1]),
    }
}
