use aoc_2023::*;
use aoc_common::{report, solve, InputArgs};
use clap::{Parser, Subcommand};

/// Advent of Code 2023
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Debug, Subcommand)]
enum Day {
    /// Trebuchet?!
    Day01(InputArgs),
    /// Cube Conundrum
    Day02(InputArgs),
    /// Gear Ratios
    Day03(InputArgs),
    /// Scratchcards
    Day04(InputArgs),
    /// If You Give A Seed A Fertilizer
    Day05(InputArgs),
    /// Wait For It
    Day06(InputArgs),
    /// Camel Cards
    Day07(InputArgs),
    /// Haunted Wasteland
    Day08(InputArgs),
    /// Mirage Maintenance
    Day09(InputArgs),
    /// Pipe Maze
    Day10(InputArgs),
    /// Cosmic Expansion
    Day11 {
        #[command(flatten)]
        input: InputArgs,
        /// How many times larger each empty row and column becomes
        #[arg(long, default_value_t = day11::DEFAULT_FACTOR)]
        factor: u64,
    },
    /// Hot Springs
    Day12(InputArgs),
    /// Point of Incidence
    Day13(InputArgs),
    /// Parabolic Reflector Dish
    Day14 {
        #[command(flatten)]
        input: InputArgs,
        /// Spin cycles to run before measuring the load
        #[arg(long, default_value_t = day14::DEFAULT_CYCLES)]
        cycles: usize,
    },
    /// Lens Library
    Day15(InputArgs),
    /// The Floor Will Be Lava
    Day16(InputArgs),
    /// Clumsy Crucible
    Day17(InputArgs),
    /// Lavaduct Lagoon
    Day18(InputArgs),
    /// Aplenty
    Day19(InputArgs),
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_2023=info");

    match Cli::parse().day {
        Day::Day01(args) => solve(&args, &[day01::part1, day01::part2]),
        Day::Day02(args) => solve(&args, &[day02::part1, day02::part2]),
        Day::Day03(args) => solve(&args, &[day03::part1, day03::part2]),
        Day::Day04(args) => solve(&args, &[day04::part1, day04::part2]),
        Day::Day05(args) => solve(&args, &[day05::part1, day05::part2]),
        Day::Day06(args) => solve(&args, &[day06::part1, day06::part2]),
        Day::Day07(args) => solve(&args, &[day07::part1, day07::part2]),
        Day::Day08(args) => solve(&args, &[day08::part1, day08::part2]),
        Day::Day09(args) => solve(&args, &[day09::part1, day09::part2]),
        Day::Day10(args) => solve(&args, &[day10::part1, day10::part2]),
        Day::Day11 { input, factor } => {
            let text = input.read()?;
            report("Solution 1", || day11::part1(&text))?;
            report("Solution 2", || day11::expanded_distances(&text, factor))
        }
        Day::Day12(args) => solve(&args, &[day12::part1, day12::part2]),
        Day::Day13(args) => solve(&args, &[day13::part1, day13::part2]),
        Day::Day14 { input, cycles } => {
            let text = input.read()?;
            report("Solution 1", || day14::part1(&text))?;
            report("Solution 2", || day14::part2(&text, cycles))
        }
        Day::Day15(args) => solve(&args, &[day15::part1, day15::part2]),
        Day::Day16(args) => solve(&args, &[day16::part1, day16::part2]),
        Day::Day17(args) => solve(&args, &[day17::part1, day17::part2]),
        Day::Day18(args) => solve(&args, &[day18::part1, day18::part2]),
        Day::Day19(args) => solve(&args, &[day19::part1, day19::part2]),
    }
}
