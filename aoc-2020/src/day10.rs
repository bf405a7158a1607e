use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

/// Adapter ratings sorted, with the outlet (0) in front and the device
/// (max + 3) at the end.
fn parse_input(input: &str) -> Result<Vec<u64>> {
    let mut joltages = input
        .lines()
        .map(|line| line.trim().parse::<u64>().into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    joltages.sort_unstable();
    let device = joltages.last().ok_or_else(|| miette!("No adapters"))? + 3;
    joltages.insert(0, 0);
    joltages.push(device);
    Ok(joltages)
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let chain = parse_input(input)?;
    let differences = chain.iter().tuple_windows().map(|(a, b)| b - a).counts();
    let ones = differences.get(&1).copied().unwrap_or(0);
    let threes = differences.get(&3).copied().unwrap_or(0);
    Ok((ones * threes).to_string())
}

/// Number of distinct adapter chains: ways[i] sums ways[j] over the
/// adapters j at most 3 jolts below i.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let chain = parse_input(input)?;
    let mut ways = vec![0u64; chain.len()];
    ways[0] = 1;
    for i in 1..chain.len() {
        ways[i] = (i.saturating_sub(3)..i)
            .filter(|&j| chain[i] - chain[j] <= 3)
            .map(|j| ways[j])
            .sum();
    }
    Ok(ways[chain.len() - 1].to_string())
}
