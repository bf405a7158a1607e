use std::fmt;

use itertools::Itertools;
use miette::{miette, Result};
use nom::{
    branch::alt,
    character::complete::{char, line_ending, u32},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Snail {
    Regular(u32),
    Pair(Box<Snail>, Box<Snail>),
}

impl fmt::Display for Snail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Snail::Regular(n) => write!(f, "{n}"),
            Snail::Pair(l, r) => write!(f, "[{l},{r}]"),
        }
    }
}

fn snail(input: &str) -> IResult<&str, Snail> {
    alt((
        map(u32, Snail::Regular),
        map(
            delimited(char('['), separated_pair(snail, char(','), snail), char(']')),
            |(l, r)| Snail::Pair(Box::new(l), Box::new(r)),
        ),
    ))(input)
}

fn parse_input(input: &str) -> Result<Vec<Snail>> {
    let (_, numbers) = all_consuming(separated_list1(line_ending, snail))(input.trim_end())
        .map_err(|e| miette!("Failed to parse snailfish numbers: {e}"))?;
    Ok(numbers)
}

/// A snailfish number as its regular values in order, each tagged with how
/// many pairs enclose it. Exploding and splitting only ever touch
/// neighbours in this order.
#[derive(Debug, Clone)]
struct Flat(Vec<(u32, u8)>);

impl From<&Snail> for Flat {
    fn from(number: &Snail) -> Self {
        fn walk(n: &Snail, depth: u8, out: &mut Vec<(u32, u8)>) {
            match n {
                Snail::Regular(v) => out.push((*v, depth)),
                Snail::Pair(l, r) => {
                    walk(l, depth + 1, out);
                    walk(r, depth + 1, out);
                }
            }
        }
        let mut out = Vec::new();
        walk(number, 0, &mut out);
        Flat(out)
    }
}

impl Flat {
    fn to_snail(&self) -> Snail {
        fn build(items: &[(u32, u8)], at: &mut usize, depth: u8) -> Snail {
            let (value, d) = items[*at];
            if d == depth {
                *at += 1;
                Snail::Regular(value)
            } else {
                let left = build(items, at, depth + 1);
                let right = build(items, at, depth + 1);
                Snail::Pair(Box::new(left), Box::new(right))
            }
        }
        build(&self.0, &mut 0, 0)
    }

    fn explode(&mut self) -> bool {
        let Some(i) = self.0.iter().position(|&(_, d)| d > 4) else {
            return false;
        };
        let (left, depth) = self.0[i];
        let (right, _) = self.0[i + 1];
        if i > 0 {
            self.0[i - 1].0 += left;
        }
        if let Some(next) = self.0.get_mut(i + 2) {
            next.0 += right;
        }
        self.0.splice(i..i + 2, [(0, depth - 1)]);
        true
    }

    fn split(&mut self) -> bool {
        let Some(i) = self.0.iter().position(|&(v, _)| v >= 10) else {
            return false;
        };
        let (value, depth) = self.0[i];
        self.0
            .splice(i..=i, [(value / 2, depth + 1), (value - value / 2, depth + 1)]);
        true
    }

    fn reduce(&mut self) {
        while self.explode() || self.split() {}
    }

    fn add(&self, other: &Flat) -> Flat {
        let mut sum = Flat(
            self.0
                .iter()
                .chain(other.0.iter())
                .map(|&(v, d)| (v, d + 1))
                .collect(),
        );
        sum.reduce();
        sum
    }
}

fn magnitude(number: &Snail) -> u32 {
    match number {
        Snail::Regular(n) => *n,
        Snail::Pair(l, r) => 3 * magnitude(l) + 2 * magnitude(r),
    }
}

/// Magnitude of the sum of every number, added in order.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum = parse_input(input)?
        .iter()
        .map(Flat::from)
        .reduce(|acc, n| acc.add(&n))
        .ok_or_else(|| miette!("No snailfish numbers"))?;
    let sum = sum.to_snail();
    tracing::debug!(%sum);
    Ok(magnitude(&sum).to_string())
}

/// Largest magnitude from adding any two different numbers.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let numbers = parse_input(input)?.iter().map(Flat::from).collect::<Vec<_>>();
    numbers
        .iter()
        .permutations(2)
        .map(|pair| magnitude(&pair[0].add(pair[1]).to_snail()))
        .max()
        .map(|m| m.to_string())
        .ok_or_else(|| miette!("Need at least two snailfish numbers"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const HOMEWORK: &str = "\
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]";

    fn total(input: &str) -> Result<String> {
        let sum = parse_input(input)?
            .iter()
            .map(Flat::from)
            .reduce(|acc, n| acc.add(&n))
            .ok_or_else(|| miette!("empty"))?;
        Ok(sum.to_snail().to_string())
    }

    #[rstest]
    #[case("[[[[[9,8],1],2],3],4]", "[[[[0,9],2],3],4]")]
    #[case("[7,[6,[5,[4,[3,2]]]]]", "[7,[6,[5,[7,0]]]]")]
    #[case("[[6,[5,[4,[3,2]]]],1]", "[[6,[5,[7,0]]],3]")]
    fn test_explode(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        let numbers = parse_input(input)?;
        let mut flat = Flat::from(&numbers[0]);
        assert!(flat.explode());
        assert_eq!(expected, flat.to_snail().to_string());
        Ok(())
    }

    #[rstest]
    #[case("[[[[4,3],4],4],[7,[[8,4],9]]]\n[1,1]", "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]")]
    #[case("[1,1]\n[2,2]\n[3,3]\n[4,4]", "[[[[1,1],[2,2]],[3,3]],[4,4]]")]
    #[case("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]", "[[[[3,0],[5,3]],[4,4]],[5,5]]")]
    #[case("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n[6,6]", "[[[[5,0],[7,4]],[5,5]],[6,6]]")]
    fn test_sum(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, total(input)?);
        Ok(())
    }

    #[rstest]
    #[case("[[1,2],[[3,4],5]]", 143)]
    #[case("[[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]", 3488)]
    fn test_magnitude(#[case] input: &str, #[case] expected: u32) -> Result<()> {
        assert_eq!(expected, magnitude(&parse_input(input)?[0]));
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!(
            "[[[[6,6],[7,6]],[[7,7],[7,0]]],[[[7,7],[7,7]],[[7,8],[9,9]]]]",
            total(HOMEWORK)?
        );
        assert_eq!("4140", part1(HOMEWORK)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("3993", part2(HOMEWORK)?);
        Ok(())
    }
}
