use miette::{IntoDiagnostic, Result};

fn parse_input(input: &str) -> Result<Vec<u32>> {
    input
        .trim()
        .split("\n\n")
        .map(|elf| {
            elf.lines()
                .map(|line| line.trim().parse::<u32>().into_diagnostic())
                .sum::<Result<u32>>()
        })
        .collect()
}

/// Calories carried by the best-stocked elf.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let most = parse_input(input)?.into_iter().max().unwrap_or(0);
    Ok(most.to_string())
}

/// Calories carried by the top three elves together.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut totals = parse_input(input)?;
    totals.sort_unstable_by(|a, b| b.cmp(a));
    Ok(totals.iter().take(3).sum::<u32>().to_string())
}
