use std::collections::HashMap;

use glam::IVec2;
use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{char, i32, line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

type Segment = (IVec2, IVec2);

fn point(input: &str) -> IResult<&str, IVec2> {
    map(separated_pair(i32, char(','), i32), |(x, y)| IVec2::new(x, y))(input)
}

fn parse_input(input: &str) -> Result<Vec<Segment>> {
    let (_, segments) = all_consuming(separated_list1(
        line_ending,
        separated_pair(point, tag(" -> "), point),
    ))(input.trim_end())
    .map_err(|e| miette!("Failed to parse vent lines: {e}"))?;
    Ok(segments)
}

/// Points covered by two or more vent lines. Segments are horizontal,
/// vertical or at exactly 45 degrees.
fn overlaps(segments: &[Segment], diagonals: bool) -> usize {
    let mut covered: HashMap<IVec2, u32> = HashMap::new();
    for &(start, end) in segments {
        let step = (end - start).signum();
        if !diagonals && step.x != 0 && step.y != 0 {
            continue;
        }
        let mut p = start;
        *covered.entry(p).or_default() += 1;
        while p != end {
            p += step;
            *covered.entry(p).or_default() += 1;
        }
    }
    covered.values().filter(|&&n| n > 1).count()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(overlaps(&parse_input(input)?, false).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(overlaps(&parse_input(input)?, true).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("5", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("12", part2(INPUT)?);
        Ok(())
    }
}
