use std::collections::HashMap;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, line_ending, u32},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{preceded, tuple},
    IResult,
};
use petgraph::{algo::dijkstra, graphmap::UnGraphMap};

const START: &str = "AA";

struct Scan<'a> {
    name: &'a str,
    rate: u32,
    tunnels: Vec<&'a str>,
}

fn scan(input: &str) -> IResult<&str, Scan<'_>> {
    let (input, (name, rate, tunnels)) = tuple((
        preceded(tag("Valve "), alpha1),
        preceded(tag(" has flow rate="), u32),
        preceded(
            alt((
                tag("; tunnels lead to valves "),
                tag("; tunnel leads to valve "),
            )),
            separated_list1(tag(", "), alpha1),
        ),
    ))(input)?;
    Ok((input, Scan { name, rate, tunnels }))
}

/// The valves worth opening, with travel times between them.
struct Network {
    rates: Vec<u32>,
    /// `distances[i][j]` in minutes; index `rates.len()` is the start.
    distances: Vec<Vec<u32>>,
}

impl Network {
    fn parse(input: &str) -> Result<Self> {
        let (_, scans) = all_consuming(separated_list1(line_ending, scan))(input.trim_end())
            .map_err(|e| miette!("Failed to parse valves: {e}"))?;
        let tunnels = UnGraphMap::<&str, ()>::from_edges(
            scans
                .iter()
                .flat_map(|s| s.tunnels.iter().map(move |t| (s.name, *t))),
        );
        let useful = scans.iter().filter(|s| s.rate > 0).collect::<Vec<_>>();
        let stops = useful
            .iter()
            .map(|s| s.name)
            .chain([START])
            .collect::<Vec<_>>();
        if !tunnels.contains_node(START) {
            return Err(miette!("No valve {START}"));
        }
        let distances = stops
            .iter()
            .map(|&from| {
                let reached = dijkstra(&tunnels, from, None, |_| 1u32);
                stops
                    .iter()
                    .map(|to| {
                        reached
                            .get(to)
                            .copied()
                            .ok_or_else(|| miette!("Valve {to} is unreachable from {from}"))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        if useful.len() > u32::BITS as usize {
            return Err(miette!("Too many working valves ({})", useful.len()));
        }
        tracing::debug!(valves = useful.len(), "compressed network");
        Ok(Self {
            rates: useful.iter().map(|s| s.rate).collect(),
            distances,
        })
    }

    /// Best pressure released for every set of valves that can be opened
    /// in `minutes`, keyed by the set as a bit mask.
    fn best_by_opened(&self, minutes: u32) -> HashMap<u32, u32> {
        let mut best = HashMap::new();
        self.explore(self.rates.len(), minutes, 0, 0, &mut best);
        best
    }

    fn explore(&self, at: usize, left: u32, opened: u32, released: u32, best: &mut HashMap<u32, u32>) {
        let entry = best.entry(opened).or_insert(0);
        *entry = (*entry).max(released);
        for (next, &rate) in self.rates.iter().enumerate() {
            let cost = self.distances[at][next] + 1;
            if opened & (1 << next) != 0 || cost >= left {
                continue;
            }
            let remaining = left - cost;
            self.explore(next, remaining, opened | 1 << next, released + rate * remaining, best);
        }
    }
}

/// Most pressure released alone in 30 minutes.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    let best = network.best_by_opened(30).into_values().max().unwrap_or(0);
    Ok(best.to_string())
}

/// Most pressure released in 26 minutes, working alongside an elephant.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    let routes = network.best_by_opened(26).into_iter().collect::<Vec<_>>();
    tracing::debug!(routes = routes.len());
    let best = routes
        .iter()
        .flat_map(|&(mine, a)| {
            routes
                .iter()
                .filter(move |&&(theirs, _)| mine & theirs == 0)
                .map(move |&(_, b)| a + b)
        })
        .max()
        .unwrap_or(0);
    Ok(best.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
Valve AA has flow rate=0; tunnels lead to valves DD, II, BB
Valve BB has flow rate=13; tunnels lead to valves CC, AA
Valve CC has flow rate=2; tunnels lead to valves DD, BB
Valve DD has flow rate=20; tunnels lead to valves CC, AA, EE
Valve EE has flow rate=3; tunnels lead to valves FF, DD
Valve FF has flow rate=0; tunnels lead to valves EE, GG
Valve GG has flow rate=0; tunnels lead to valves FF, HH
Valve HH has flow rate=22; tunnel leads to valve GG
Valve II has flow rate=0; tunnels lead to valves AA, JJ
Valve JJ has flow rate=21; tunnel leads to valve II";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("1651", part1(INPUT)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("1707", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_distances() -> Result<()> {
        let network = Network::parse(INPUT)?;
        assert_eq!(6, network.rates.len());
        // AA to HH goes through DD, EE, FF and GG.
        let hh = network.rates.iter().position(|&r| r == 22).ok_or_else(|| miette!("no HH"))?;
        assert_eq!(5, network.distances[network.rates.len()][hh]);
        Ok(())
    }
}
