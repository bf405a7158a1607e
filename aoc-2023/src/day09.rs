use miette::{miette, IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<Vec<i64>>> {
    input
        .lines()
        .map(|line| {
            let history = line
                .split_whitespace()
                .map(|n| n.parse::<i64>().into_diagnostic())
                .collect::<Result<Vec<_>>>()?;
            if history.is_empty() {
                return Err(miette!("Empty history"));
            }
            Ok(history)
        })
        .collect()
}

/// Next value of a sequence, found by summing the last value of every
/// difference row down to the all-zero row.
fn extrapolate(history: &[i64]) -> i64 {
    let mut row = history.to_vec();
    let mut next = 0;
    while row.iter().any(|&v| v != 0) {
        next += row[row.len() - 1];
        row = row.windows(2).map(|w| w[1] - w[0]).collect();
    }
    next
}

/// Sum of the next value of every history.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: i64 = parse_input(input)?.iter().map(|h| extrapolate(h)).sum();
    Ok(sum.to_string())
}

/// Sum of the value before each history, which is the next value of the
/// reversed history.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let sum: i64 = parse_input(input)?
        .into_iter()
        .map(|mut h| {
            h.reverse();
            extrapolate(&h)
        })
        .sum();
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "0 3 6 9 12 15\n1 3 6 10 15 21\n10 13 16 21 30 45";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("114", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("2", part2(INPUT)?);
        Ok(())
    }

    #[rstest]
    #[case(&[0, 3, 6, 9, 12, 15], 18)]
    #[case(&[10, 13, 16, 21, 30, 45], 68)]
    #[case(&[7], 7)]
    fn test_extrapolate(#[case] history: &[i64], #[case] expected: i64) {
        assert_eq!(expected, extrapolate(history));
    }
}
