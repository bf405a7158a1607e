use miette::{miette, IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<u32>> {
    // only the first line is played
    let first = input
        .lines()
        .next()
        .ok_or_else(|| miette!("No starting numbers"))?;
    first
        .split(',')
        .map(|n| n.trim().parse::<u32>().into_diagnostic())
        .collect()
}

/// The number spoken on turn `turns` (1-based) of the memory game.
///
/// `last_seen[n]` holds the (1-based) turn `n` was last spoken on, 0 meaning never.
fn spoken_at(starting: &[u32], turns: u32) -> u32 {
    let turns = turns as usize;
    if turns == 0 {
        return 0;
    }
    if turns <= starting.len() {
        return starting[turns - 1];
    }

    let (&last, earlier) = match starting.split_last() {
        Some(split) => split,
        None => return 0,
    };
    let largest = starting.iter().copied().max().unwrap_or(0) as usize;
    let mut last_seen = vec![0u32; turns.max(largest + 1)];
    for (turn, &n) in earlier.iter().enumerate() {
        last_seen[n as usize] = turn as u32 + 1;
    }
    let mut current = last;

    for turn in starting.len() as u32..turns as u32 {
        let previous = std::mem::replace(&mut last_seen[current as usize], turn);
        current = if previous == 0 { 0 } else { turn - previous };
    }
    current
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let starting = parse_input(input)?;
    Ok(spoken_at(&starting, 2020).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let starting = parse_input(input)?;
    Ok(spoken_at(&starting, 30_000_000).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0,3,6", "436")]
    #[case("1,3,2", "1")]
    #[case("2,1,3", "10")]
    #[case("1,2,3", "27")]
    #[case("2,3,1", "78")]
    #[case("3,2,1", "438")]
    #[case("3,1,2", "1836")]
    fn test_part1(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part1(input)?);
        Ok(())
    }

    #[test]
    fn test_first_turns() {
        let spoken = (1..=10).map(|turn| spoken_at(&[0, 3, 6], turn)).collect::<Vec<_>>();
        assert_eq!(vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0], spoken);
    }
}
