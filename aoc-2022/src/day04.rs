use std::ops::RangeInclusive;

use miette::{miette, Result};
use nom::{
    character::complete::{char, line_ending, u32},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

type Sections = RangeInclusive<u32>;

fn sections(input: &str) -> IResult<&str, Sections> {
    map(separated_pair(u32, char('-'), u32), |(a, b)| a..=b)(input)
}

fn parse_input(input: &str) -> Result<Vec<(Sections, Sections)>> {
    let (_, pairs) = all_consuming(separated_list1(
        line_ending,
        separated_pair(sections, char(','), sections),
    ))(input.trim_end())
    .map_err(|e| miette!("Failed to parse assignments: {e}"))?;
    Ok(pairs)
}

fn covers(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.start() && b.end() <= a.end()
}

fn overlaps(a: &Sections, b: &Sections) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

/// Pairs where one assignment fully contains the other.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let count = parse_input(input)?
        .iter()
        .filter(|(a, b)| covers(a, b) || covers(b, a))
        .count();
    Ok(count.to_string())
}

/// Pairs whose assignments overlap at all.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let count = parse_input(input)?
        .iter()
        .filter(|(a, b)| overlaps(a, b))
        .count();
    Ok(count.to_string())
}
