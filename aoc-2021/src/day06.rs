use miette::{miette, IntoDiagnostic, Result};

pub const DEFAULT_DAYS: usize = 80;
const LONG_RUN: usize = 256;

/// Fish bucketed by timer value; a new fish starts at 8, a parent resets to 6.
fn population(input: &str, days: usize) -> Result<u64> {
    let mut timers = [0u64; 9];
    for s in input.trim().split(',') {
        let timer = s.trim().parse::<usize>().into_diagnostic()?;
        *timers
            .get_mut(timer)
            .ok_or_else(|| miette!("Timer {timer} out of range"))? += 1;
    }
    for _ in 0..days {
        timers.rotate_left(1);
        timers[6] += timers[8];
    }
    Ok(timers.iter().sum())
}

/// Lanternfish after `days` days.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str, days: usize) -> Result<String> {
    Ok(population(input, days)?.to_string())
}

/// Lanternfish after 256 days.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(population(input, LONG_RUN)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(18, "26")]
    #[case(80, "5934")]
    fn test_part1(#[case] days: usize, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part1("3,4,3,1,2", days)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("26984457539", part2("3,4,3,1,2")?);
        Ok(())
    }
}
