use miette::{IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<u32>> {
    input
        .lines()
        .map(|line| line.trim().parse::<u32>().into_diagnostic())
        .collect()
}

/// Depth readings `gap` apart that increase. Comparing sliding windows of
/// three is the same as comparing readings three apart, since the middle
/// two terms cancel.
fn increases(depths: &[u32], gap: usize) -> usize {
    depths
        .iter()
        .zip(depths.iter().skip(gap))
        .filter(|(a, b)| b > a)
        .count()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(increases(&parse_input(input)?, 1).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(increases(&parse_input(input)?, 3).to_string())
}
