use std::collections::HashMap;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, char, line_ending, space1, u32},
    combinator::{all_consuming, opt, recognize, value},
    multi::separated_list1,
    sequence::{pair, separated_pair, terminated},
    IResult,
};
use petgraph::{graphmap::DiGraphMap, visit::{Bfs, Reversed}};

const TARGET: &str = "shiny gold";

/// Edges point from the outer bag to the bags it must contain, weighted by count.
type BagGraph<'a> = DiGraphMap<&'a str, u32>;

fn color(input: &str) -> IResult<&str, &str> {
    recognize(separated_pair(alpha1, space1, alpha1))(input)
}

fn contained(input: &str) -> IResult<&str, (u32, &str)> {
    separated_pair(
        u32,
        space1,
        terminated(color, pair(tag(" bag"), opt(char('s')))),
    )(input)
}

fn rule(input: &str) -> IResult<&str, (&str, Vec<(u32, &str)>)> {
    separated_pair(
        color,
        tag(" bags contain "),
        terminated(
            alt((
                value(Vec::new(), tag("no other bags")),
                separated_list1(tag(", "), contained),
            )),
            char('.'),
        ),
    )(input)
}

fn parse_input(input: &str) -> Result<BagGraph> {
    let (_, rules) = all_consuming(separated_list1(line_ending, rule))(input)
        .map_err(|e| miette!("Failed to parse bag rules: {e}"))?;

    let mut graph = BagGraph::new();
    for (outer, contents) in rules {
        graph.add_node(outer);
        for (count, inner) in contents {
            graph.add_edge(outer, inner, count);
        }
    }
    Ok(graph)
}

/// Total bags inside `bag`, not counting `bag` itself.
fn bags_inside<'a>(graph: &BagGraph<'a>, bag: &'a str, memo: &mut HashMap<&'a str, u64>) -> u64 {
    if let Some(&count) = memo.get(bag) {
        return count;
    }
    let count = graph
        .edges(bag)
        .map(|(_, inner, &n)| n as u64 * (1 + bags_inside(graph, inner, memo)))
        .sum();
    memo.insert(bag, count);
    count
}

/// Number of bag colors that can eventually contain a shiny gold bag.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let graph = parse_input(input)?;
    if !graph.contains_node(TARGET) {
        return Err(miette!("No rule mentions a {TARGET} bag"));
    }

    let reversed = Reversed(&graph);
    let mut bfs = Bfs::new(reversed, TARGET);
    let mut ancestors = 0;
    while bfs.next(reversed).is_some() {
        ancestors += 1;
    }
    // the walk includes the start bag
    Ok((ancestors - 1).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let graph = parse_input(input)?;
    if !graph.contains_node(TARGET) {
        return Err(miette!("No rule mentions a {TARGET} bag"));
    }
    Ok(bags_inside(&graph, TARGET, &mut HashMap::new()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("4", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("32", part2(EXAMPLE)?);
        let input = "\
shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.";
        assert_eq!("126", part2(input)?);
        Ok(())
    }

    #[test]
    fn test_rule_parser() {
        assert_eq!(
            rule("light red bags contain 1 bright white bag, 2 muted yellow bags."),
            Ok(("", ("light red", vec![(1, "bright white"), (2, "muted yellow")])))
        );
        assert_eq!(
            rule("faded blue bags contain no other bags."),
            Ok(("", ("faded blue", vec![])))
        );
    }
}
