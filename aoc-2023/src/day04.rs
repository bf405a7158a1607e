use std::collections::HashSet;

use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{line_ending, space0, space1, u32},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

fn numbers(input: &str) -> IResult<&str, Vec<u32>> {
    preceded(space0, separated_list1(space1, u32))(input)
}

/// How many of a card's numbers are winning numbers.
fn card(input: &str) -> IResult<&str, usize> {
    map(
        preceded(
            tuple((tag("Card"), space1, u32, tag(":"))),
            separated_pair(numbers, delimited(space1, tag("|"), space1), numbers),
        ),
        |(winning, have)| {
            let winning = winning.into_iter().collect::<HashSet<_>>();
            have.iter().filter(|n| winning.contains(*n)).count()
        },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<usize>> {
    let (_, cards) = all_consuming(separated_list1(line_ending, card))(input.trim_end())
        .map_err(|e| miette!("Failed to parse cards: {e}"))?;
    Ok(cards)
}

/// Points: each card is worth 2^(matches - 1).
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let points: u32 = parse_input(input)?
        .iter()
        .filter(|&&m| m > 0)
        .map(|&m| 1 << (m - 1))
        .sum();
    Ok(points.to_string())
}

/// Total scratchcards once each card wins copies of the ones after it.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let matches = parse_input(input)?;
    let mut copies = vec![1u64; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        for j in i + 1..(i + 1 + m).min(matches.len()) {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum::<u64>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("13", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("30", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_matches() -> Result<()> {
        assert_eq!(vec![4, 2, 2, 1, 0, 0], parse_input(INPUT)?);
        Ok(())
    }
}
