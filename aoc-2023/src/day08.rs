use std::collections::HashMap;

use aoc_common::math::lcm_all;
use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{alphanumeric1, line_ending, multispace1, one_of},
    combinator::all_consuming,
    multi::{many1, separated_list1},
    sequence::{delimited, separated_pair},
    IResult,
};

struct Network<'a> {
    turns: Vec<char>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

fn node(input: &str) -> IResult<&str, (&str, (&str, &str))> {
    separated_pair(
        alphanumeric1,
        tag(" = "),
        delimited(
            tag("("),
            separated_pair(alphanumeric1, tag(", "), alphanumeric1),
            tag(")"),
        ),
    )(input)
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let (_, (turns, nodes)) = all_consuming(separated_pair(
            many1(one_of("LR")),
            multispace1,
            separated_list1(line_ending, node),
        ))(input.trim())
        .map_err(|e| miette!("Failed to parse network: {e}"))?;
        Ok(Self {
            turns,
            nodes: nodes.into_iter().collect(),
        })
    }

    /// Steps from `start` until `done` holds for the node reached.
    fn steps(&self, start: &'a str, done: impl Fn(&str) -> bool) -> Result<u64> {
        let mut at = start;
        for (steps, turn) in self.turns.iter().cycle().enumerate() {
            if done(at) && steps > 0 {
                return Ok(steps as u64);
            }
            let &(left, right) = self
                .nodes
                .get(at)
                .ok_or_else(|| miette!("No node {at}"))?;
            at = if *turn == 'L' { left } else { right };
            if steps > self.nodes.len() * self.turns.len() {
                break;
            }
        }
        Err(miette!("{start} never reaches its goal"))
    }
}

/// Steps from AAA to ZZZ.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    Ok(network.steps("AAA", |n| n == "ZZZ")?.to_string())
}

/// Steps until every ghost, starting on each `..A` node, stands on a `..Z`.
///
/// Each ghost's path loops back on itself with the same period as its
/// first arrival, so the answer is the least common multiple.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let network = Network::parse(input)?;
    let periods = network
        .nodes
        .keys()
        .filter(|n| n.ends_with('A'))
        .map(|start| network.steps(start, |n| n.ends_with('Z')))
        .collect::<Result<Vec<_>>>()?;
    tracing::debug!(?periods);
    Ok(lcm_all(periods).to_string())
}
