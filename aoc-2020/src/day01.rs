use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

const TARGET: u64 = 2020;

fn parse_input(input: &str) -> Result<Vec<u64>> {
    input
        .lines()
        .map(|line| line.trim().parse::<u64>().into_diagnostic())
        .collect()
}

/// Product of the two entries summing to 2020, found in one pass with a
/// complement lookup.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let numbers = parse_input(input)?;
    let mut seen = HashSet::new();
    for &n in &numbers {
        if let Some(complement) = TARGET.checked_sub(n) {
            if seen.contains(&complement) {
                tracing::debug!(n, complement, "found pair");
                return Ok((n * complement).to_string());
            }
        }
        seen.insert(n);
    }
    Err(miette!("No two entries sum to {TARGET}"))
}

/// Same idea for three entries: every pairwise sum of earlier entries is
/// remembered, so each new entry only needs one lookup.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let numbers = parse_input(input)?;
    let mut pair_sums: HashMap<u64, (u64, u64)> = HashMap::new();
    for (i, &n) in numbers.iter().enumerate() {
        if let Some(&(a, b)) = TARGET.checked_sub(n).and_then(|c| pair_sums.get(&c)) {
            tracing::debug!(a, b, n, "found triple");
            return Ok((a * b * n).to_string());
        }
        for &m in &numbers[..i] {
            pair_sums.entry(n + m).or_insert((m, n));
        }
    }
    Err(miette!("No three entries sum to {TARGET}"))
}

/// Exhaustive search over all `k`-combinations, kept for cross-checking.
pub fn brute_force(input: &str, k: usize) -> Result<String> {
    let numbers = parse_input(input)?;
    numbers
        .into_iter()
        .combinations(k)
        .find(|combo| combo.iter().sum::<u64>() == TARGET)
        .map(|combo| combo.iter().product::<u64>().to_string())
        .ok_or_else(|| miette!("No {k} entries sum to {TARGET}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("514579", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("241861950", part2(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_brute_force_agrees() -> Result<()> {
        assert_eq!(part1(EXAMPLE)?, brute_force(EXAMPLE, 2)?);
        assert_eq!(part2(EXAMPLE)?, brute_force(EXAMPLE, 3)?);
        Ok(())
    }

    #[test]
    fn test_no_solution() {
        assert!(part1("1\n2\n3").is_err());
        assert!(part2("1\n2\n3").is_err());
    }
}
