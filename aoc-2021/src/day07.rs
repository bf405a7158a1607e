use miette::{miette, IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<i64>> {
    let positions = input
        .trim()
        .split(',')
        .map(|s| s.trim().parse::<i64>().into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    if positions.is_empty() {
        return Err(miette!("No crab positions"));
    }
    Ok(positions)
}

/// Cheapest alignment when each step costs one fuel: the median.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut positions = parse_input(input)?;
    positions.sort_unstable();
    let median = positions[positions.len() / 2];
    let fuel: i64 = positions.iter().map(|p| (p - median).abs()).sum();
    Ok(fuel.to_string())
}

/// Cheapest alignment when the n-th step costs n fuel.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let positions = parse_input(input)?;
    let (min, max) = positions
        .iter()
        .fold((i64::MAX, i64::MIN), |(lo, hi), &p| (lo.min(p), hi.max(p)));
    let fuel = (min..=max)
        .map(|target| {
            positions
                .iter()
                .map(|p| {
                    let d = (p - target).abs();
                    d * (d + 1) / 2
                })
                .sum::<i64>()
        })
        .min()
        .ok_or_else(|| miette!("No alignment target"))?;
    Ok(fuel.to_string())
}
