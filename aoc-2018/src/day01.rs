use std::collections::HashSet;

use miette::{IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<i64>> {
    input
        .lines()
        .map(|line| line.trim().parse::<i64>().into_diagnostic())
        .collect()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let changes = parse_input(input)?;
    Ok(changes.iter().sum::<i64>().to_string())
}

/// First running frequency reached twice, cycling through the list as often as needed.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let changes = parse_input(input)?;
    if changes.is_empty() {
        return Err(miette::miette!("No frequency changes in input"));
    }

    let mut seen = HashSet::from([0i64]);
    let mut frequency = 0;
    for change in changes.iter().cycle() {
        frequency += change;
        if !seen.insert(frequency) {
            break;
        }
    }
    Ok(frequency.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("3", part1("+1\n-2\n+3\n+1")?);
        Ok(())
    }

    #[rstest]
    #[case("+1\n-2\n+3\n+1", "2")]
    #[case("+1\n-1", "0")]
    #[case("+3\n+3\n+4\n-2\n-4", "10")]
    #[case("-6\n+3\n+8\n+5\n-6", "5")]
    #[case("+7\n+7\n-2\n-7\n-4", "14")]
    fn test_part2(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part2(input)?);
        Ok(())
    }

    #[test]
    fn test_part2_empty_input() {
        assert!(part2("").is_err());
    }
}
