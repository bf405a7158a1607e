use std::collections::HashSet;

use miette::Result;

/// Each group is a list of people; each person the set of questions they answered "yes".
fn parse_input(input: &str) -> Vec<Vec<HashSet<char>>> {
    input
        .split("\n\n")
        .map(|group| group.lines().map(|person| person.trim().chars().collect()).collect())
        .collect()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: usize = parse_input(input)
        .iter()
        .map(|group| group.iter().flatten().collect::<HashSet<_>>().len())
        .sum();
    Ok(sum.to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let sum: usize = parse_input(input)
        .into_iter()
        .map(|group| {
            group
                .into_iter()
                .reduce(|common, person| &common & &person)
                .map_or(0, |common| common.len())
        })
        .sum();
    Ok(sum.to_string())
}
