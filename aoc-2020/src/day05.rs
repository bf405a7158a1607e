use itertools::Itertools;
use miette::{miette, Result};

/// A boarding pass is a 10-bit binary number: B/R are ones, F/L are zeros.
/// The top seven bits are the row and the low three the column, so the
/// number itself is `row * 8 + column`.
fn seat_id(pass: &str) -> Result<u32> {
    if pass.len() != 10 {
        return Err(miette!("Boarding pass {pass:?} is not 10 characters"));
    }
    pass.chars().try_fold(0, |id, c| match c {
        'B' | 'R' => Ok(id << 1 | 1),
        'F' | 'L' => Ok(id << 1),
        other => Err(miette!("Unexpected character {other:?} in boarding pass")),
    })
}

fn parse_input(input: &str) -> Result<Vec<u32>> {
    input.lines().map(|line| seat_id(line.trim())).collect()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    parse_input(input)?
        .into_iter()
        .max()
        .map(|id| id.to_string())
        .ok_or_else(|| miette!("No boarding passes"))
}

/// The only gap in the sorted seat ids is ours.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    parse_input(input)?
        .into_iter()
        .sorted_unstable()
        .tuple_windows()
        .find(|(a, b)| b - a == 2)
        .map(|(a, _)| (a + 1).to_string())
        .ok_or_else(|| miette!("No free seat between two taken ones"))
}
