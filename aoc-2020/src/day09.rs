use std::cmp::Ordering;

use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

pub const DEFAULT_PREAMBLE: usize = 25;

fn parse_input(input: &str) -> Result<Vec<u64>> {
    input
        .lines()
        .map(|line| line.trim().parse::<u64>().into_diagnostic())
        .collect()
}

/// First number that is not the sum of two distinct numbers among the
/// `preamble` numbers right before it.
fn first_invalid(numbers: &[u64], preamble: usize) -> Option<u64> {
    numbers.windows(preamble + 1).find_map(|window| {
        let (&candidate, previous) = window.split_last()?;
        let valid = previous
            .iter()
            .tuple_combinations()
            .any(|(a, b)| a != b && a + b == candidate);
        (!valid).then_some(candidate)
    })
}

/// Contiguous run of at least two numbers summing to `target`, found with a
/// sliding window (all inputs are positive).
fn contiguous_sum(numbers: &[u64], target: u64) -> Option<&[u64]> {
    let (mut start, mut end, mut sum) = (0, 0, 0);
    loop {
        match sum.cmp(&target) {
            Ordering::Equal if end - start >= 2 => return Some(&numbers[start..end]),
            Ordering::Less | Ordering::Equal => {
                sum += numbers.get(end)?;
                end += 1;
            }
            Ordering::Greater => {
                sum -= numbers[start];
                start += 1;
            }
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str, preamble: usize) -> Result<String> {
    let numbers = parse_input(input)?;
    first_invalid(&numbers, preamble)
        .map(|n| n.to_string())
        .ok_or_else(|| miette!("Every number is a sum of two from its preamble"))
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str, preamble: usize) -> Result<String> {
    let numbers = parse_input(input)?;
    let target = first_invalid(&numbers, preamble)
        .ok_or_else(|| miette!("Every number is a sum of two from its preamble"))?;
    let run = contiguous_sum(&numbers, target)
        .ok_or_else(|| miette!("No contiguous run sums to {target}"))?;
    let (min, max) = run
        .iter()
        .minmax()
        .into_option()
        .ok_or_else(|| miette!("Empty run"))?;
    Ok((min + max).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("127", part1(EXAMPLE, 5)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("62", part2(EXAMPLE, 5)?);
        Ok(())
    }

    #[test]
    fn test_contiguous_sum() -> Result<()> {
        let numbers = parse_input(EXAMPLE)?;
        assert_eq!(Some(&[15, 25, 47, 40][..]), contiguous_sum(&numbers, 127));
        assert_eq!(None, contiguous_sum(&[1, 2], 100));
        Ok(())
    }
}
