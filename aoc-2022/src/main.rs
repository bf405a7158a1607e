use aoc_2022::*;
use aoc_common::{report, solve, InputArgs};
use clap::{Parser, Subcommand};

/// Advent of Code 2022
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    day: Day,
}

#[derive(Debug, Subcommand)]
enum Day {
    /// Calorie Counting
    Day01(InputArgs),
    /// Rock Paper Scissors
    Day02(InputArgs),
    /// Rucksack Reorganization
    Day03(InputArgs),
    /// Camp Cleanup
    Day04(InputArgs),
    /// Supply Stacks
    Day05(InputArgs),
    /// Tuning Trouble
    Day06(InputArgs),
    /// No Space Left On Device
    Day07(InputArgs),
    /// Treetop Tree House
    Day08(InputArgs),
    /// Rope Bridge
    Day09(InputArgs),
    /// Cathode-Ray Tube
    Day10(InputArgs),
    /// Monkey in the Middle
    Day11(InputArgs),
    /// Hill Climbing Algorithm
    Day12(InputArgs),
    /// Distress Signal
    Day13(InputArgs),
    /// Regolith Reservoir
    Day14(InputArgs),
    /// Beacon Exclusion Zone
    Day15 {
        #[command(flatten)]
        input: InputArgs,
        /// Row to count excluded positions on
        #[arg(long, default_value_t = day15::DEFAULT_ROW)]
        y: i32,
        /// Largest coordinate the distress beacon can have
        #[arg(long, default_value_t = day15::DEFAULT_MAX)]
        max: i32,
    },
    /// Proboscidea Volcanium
    Day16(InputArgs),
    /// Pyroclastic Flow
    Day17(InputArgs),
    /// Boiling Boulders
    Day18(InputArgs),
    /// Grove Positioning System
    Day20(InputArgs),
    /// Monkey Math
    Day21(InputArgs),
    /// Monkey Map
    Day22(InputArgs),
}

#[tracing::instrument]
fn main() -> miette::Result<()> {
    aoc_common::init_tracing("aoc_2022=info");

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
        Day::Day11(args) => solve(&args, &[day11::part1, day11::part2]),
        Day::Day12(args) => solve(&args, &[day12::part1, day12::part2]),
        Day::Day13(args) => solve(&args, &[day13::part1, day13::part2]),
        Day::Day14(args) => solve(&args, &[day14::part1, day14::part2]),
        Day::Day15 { input, y, max } => {
            let text = input.read()?;
            report("Solution 1", || day15::part1(&text, y))?;
            report("Solution 2", || day15::part2(&text, max))
        }
        Day::Day16(args) => solve(&args, &[day16::part1, day16::part2]),
        Day::Day17(args) => solve(&args, &[day17::part1, day17::part2]),
        Day::Day18(args) => solve(&args, &[day18::part1, day18::part2]),
        Day::Day20(args) => solve(&args, &[day20::part1, day20::part2]),
        Day::Day21(args) => solve(&args, &[day21::part1, day21::part2]),
        Day::Day22(args) => solve(&args, &[day22::part1, day22::part2]),
    }
}
