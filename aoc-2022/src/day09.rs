use std::collections::HashSet;

use glam::IVec2;
use miette::{miette, Result};
use nom::{
    branch::alt,
    character::complete::{char, line_ending, space1, u32},
    combinator::{all_consuming, value},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

fn motion(input: &str) -> IResult<&str, (IVec2, u32)> {
    separated_pair(
        alt((
            value(IVec2::X, char('R')),
            value(IVec2::NEG_X, char('L')),
            value(IVec2::Y, char('U')),
            value(IVec2::NEG_Y, char('D')),
        )),
        space1,
        u32,
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<(IVec2, u32)>> {
    let (_, motions) = all_consuming(separated_list1(line_ending, motion))(input.trim_end())
        .map_err(|e| miette!("Failed to parse motions: {e}"))?;
    Ok(motions)
}

/// Where a knot ends up once the knot ahead of it has moved.
fn follow(leader: IVec2, knot: IVec2) -> IVec2 {
    let gap = leader - knot;
    if gap.abs().max_element() <= 1 {
        knot
    } else {
        knot + gap.signum()
    }
}

fn tail_visits(input: &str, knots: usize) -> Result<usize> {
    let mut rope = vec![IVec2::ZERO; knots];
    let mut visited = HashSet::from([IVec2::ZERO]);
    for (direction, steps) in parse_input(input)? {
        for _ in 0..steps {
            rope[0] += direction;
            for i in 1..knots {
                rope[i] = follow(rope[i - 1], rope[i]);
            }
            visited.insert(rope[knots - 1]);
        }
    }
    Ok(visited.len())
}

/// Positions the tail of a two-knot rope visits.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(tail_visits(input, 2)?.to_string())
}

/// Positions the tail of a ten-knot rope visits.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(tail_visits(input, 10)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SHORT: &str = "R 4\nU 4\nL 3\nD 1\nR 4\nD 1\nL 5\nR 2";
    const LONG: &str = "R 5\nU 8\nL 8\nD 3\nR 17\nD 10\nL 25\nU 20";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("13", part1(SHORT)?);
        Ok(())
    }

    #[rstest]
    #[case(SHORT, "1")]
    #[case(LONG, "36")]
    fn test_part2(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part2(input)?);
        Ok(())
    }

    #[rstest]
    #[case(IVec2::new(2, 0), IVec2::ZERO, IVec2::new(1, 0))]
    #[case(IVec2::new(1, 1), IVec2::ZERO, IVec2::ZERO)]
    #[case(IVec2::new(2, 1), IVec2::ZERO, IVec2::new(1, 1))]
    #[case(IVec2::new(2, 2), IVec2::ZERO, IVec2::new(1, 1))]
    fn test_follow(#[case] leader: IVec2, #[case] knot: IVec2, #[case] expected: IVec2) {
        assert_eq!(expected, follow(leader, knot));
    }
}
