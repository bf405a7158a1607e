use std::cmp::Ordering;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace1, u32},
    combinator::{all_consuming, map},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, separated_pair},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Packet {
    Integer(u32),
    List(Vec<Packet>),
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Integer(a), Packet::Integer(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => a.cmp(b),
            (Packet::Integer(a), Packet::List(b)) => [Packet::Integer(*a)][..].cmp(b),
            (Packet::List(a), Packet::Integer(b)) => a[..].cmp(&[Packet::Integer(*b)]),
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn packet(input: &str) -> IResult<&str, Packet> {
    alt((
        map(u32, Packet::Integer),
        map(
            delimited(char('['), separated_list0(char(','), packet), char(']')),
            Packet::List,
        ),
    ))(input)
}

fn parse_input(input: &str) -> Result<Vec<(Packet, Packet)>> {
    let text = input.trim().replace("\r\n", "\n");
    let (_, pairs) = all_consuming(separated_list1(
        tag("\n\n"),
        separated_pair(packet, multispace1, packet),
    ))(text.as_str())
    .map_err(|e| miette!("Failed to parse packets: {e}"))?;
    Ok(pairs)
}

/// Sum of the 1-based indices of pairs already in order.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: usize = parse_input(input)?
        .iter()
        .enumerate()
        .filter(|(_, (left, right))| left < right)
        .map(|(i, _)| i + 1)
        .sum();
    Ok(sum.to_string())
}

/// Decoder key: product of the divider packets' positions once sorted.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let packets = parse_input(input)?
        .into_iter()
        .flat_map(|(a, b)| [a, b])
        .collect::<Vec<_>>();
    let divider = |n| Packet::List(vec![Packet::List(vec![Packet::Integer(n)])]);
    // Position of a divider is one more than the packets sorting before it.
    let (two, six) = (divider(2), divider(6));
    let before_two = packets.iter().filter(|p| **p < two).count() + 1;
    let before_six = packets.iter().filter(|p| **p < six).count() + 2;
    Ok((before_two * before_six).to_string())
}
