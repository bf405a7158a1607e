use std::collections::HashSet;

use miette::{miette, Result};
use petgraph::graphmap::UnGraphMap;

const START: &str = "start";
const END: &str = "end";

fn parse_input(input: &str) -> Result<UnGraphMap<&str, ()>> {
    let edges = input
        .lines()
        .map(|line| {
            line.trim()
                .split_once('-')
                .ok_or_else(|| miette!("Malformed passage {line:?}"))
        })
        .collect::<Result<Vec<_>>>()?;
    let caves = UnGraphMap::from_edges(edges);
    if !caves.contains_node(START) || !caves.contains_node(END) {
        return Err(miette!("Cave system needs both {START} and {END}"));
    }
    Ok(caves)
}

fn is_small(cave: &str) -> bool {
    cave.chars().all(|c| c.is_ascii_lowercase())
}

/// Counts paths to the end. Small caves are visited at most once, except
/// that a single small cave other than the start may be visited twice while
/// `spare_visit` is still available.
fn paths<'a>(
    caves: &UnGraphMap<&'a str, ()>,
    cave: &'a str,
    visited: &mut HashSet<&'a str>,
    spare_visit: bool,
) -> usize {
    if cave == END {
        return 1;
    }
    let mut count = 0;
    for next in caves.neighbors(cave) {
        if next == START {
            continue;
        }
        if !is_small(next) {
            count += paths(caves, next, visited, spare_visit);
        } else if visited.insert(next) {
            count += paths(caves, next, visited, spare_visit);
            visited.remove(next);
        } else if spare_visit {
            count += paths(caves, next, visited, false);
        }
    }
    count
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let caves = parse_input(input)?;
    let mut visited = HashSet::from([START]);
    Ok(paths(&caves, START, &mut visited, false).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let caves = parse_input(input)?;
    let mut visited = HashSet::from([START]);
    Ok(paths(&caves, START, &mut visited, true).to_string())
}
