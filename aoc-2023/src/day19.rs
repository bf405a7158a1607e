use std::collections::HashMap;
use std::ops::Range;

use miette::{miette, Result};
use nom::{
    character::complete::{alpha1, char, line_ending, one_of, u64},
    combinator::{all_consuming, map, map_res},
    multi::{count, many0, separated_list1},
    sequence::{delimited, pair, preceded, separated_pair, terminated, tuple},
    IResult,
};

const START: &str = "in";
const RATINGS: Range<u64> = 1..4001;

/// Ratings of a part, in `xmas` order.
type Part = [u64; 4];

/// A box of parts: one half-open rating range per category.
type Parts = [Range<u64>; 4];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule<'a> {
    category: usize,
    /// Ratings that satisfy the comparison.
    accepts: Range<u64>,
    target: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Workflow<'a> {
    rules: Vec<Rule<'a>>,
    fallback: &'a str,
}

fn category(input: &str) -> IResult<&str, usize> {
    map_res(one_of("xmas"), |c| {
        "xmas".find(c).ok_or_else(|| miette!("Unknown category {c}"))
    })(input)
}

fn rule(input: &str) -> IResult<&str, Rule> {
    map(
        tuple((
            category,
            one_of("<>"),
            u64,
            preceded(char(':'), alpha1),
        )),
        |(category, op, value, target)| Rule {
            category,
            accepts: if op == '<' { 0..value } else { value + 1..u64::MAX },
            target,
        },
    )(input)
}

fn workflow(input: &str) -> IResult<&str, (&str, Workflow)> {
    pair(
        alpha1,
        delimited(
            char('{'),
            map(
                pair(many_rules, alpha1),
                |(rules, fallback)| Workflow { rules, fallback },
            ),
            char('}'),
        ),
    )(input)
}

fn many_rules(input: &str) -> IResult<&str, Vec<Rule>> {
    many0(terminated(rule, char(',')))(input)
}

fn part(input: &str) -> IResult<&str, Part> {
    map_res(
        delimited(
            char('{'),
            separated_list1(char(','), separated_pair(category, char('='), u64)),
            char('}'),
        ),
        |ratings| -> Result<Part> {
            let mut part = [None; 4];
            for (c, r) in ratings {
                part[c] = Some(r);
            }
            part.iter()
                .map(|r| r.ok_or_else(|| miette!("Part is missing a rating")))
                .collect::<Result<Vec<_>>>()?
                .try_into()
                .map_err(|_| miette!("Part has four ratings"))
        },
    )(input)
}

struct System<'a> {
    workflows: HashMap<&'a str, Workflow<'a>>,
    parts: Vec<Part>,
}

impl<'a> System<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let (_, (workflows, parts)) = all_consuming(separated_pair(
            separated_list1(line_ending, workflow),
            count(line_ending, 2),
            separated_list1(line_ending, part),
        ))(input.trim_end())
        .map_err(|e| miette!("Failed to parse system: {e}"))?;
        let workflows = workflows.into_iter().collect::<HashMap<_, _>>();
        if !workflows.contains_key(START) {
            return Err(miette!("No workflow named {START}"));
        }
        Ok(Self { workflows, parts })
    }

    fn workflow(&self, name: &str) -> Result<&Workflow<'a>> {
        self.workflows
            .get(name)
            .ok_or_else(|| miette!("Unknown workflow {name}"))
    }

    fn accepts(&self, part: &Part) -> Result<bool> {
        let mut name = START;
        // each workflow is visited at most once on an acyclic system
        for _ in 0..=self.workflows.len() {
            match name {
                "A" => return Ok(true),
                "R" => return Ok(false),
                _ => {}
            }
            let workflow = self.workflow(name)?;
            name = workflow
                .rules
                .iter()
                .find(|r| r.accepts.contains(&part[r.category]))
                .map_or(workflow.fallback, |r| r.target);
        }
        Err(miette!("Workflows loop forever"))
    }

    /// Parts within `parts` that end up accepted when starting at `name`.
    fn combinations(&self, name: &str, mut parts: Parts, depth: usize) -> Result<u64> {
        match name {
            "A" => return Ok(parts.iter().map(|r| r.end - r.start).product()),
            "R" => return Ok(0),
            _ if depth > self.workflows.len() => return Err(miette!("Workflows loop forever")),
            _ => {}
        }
        let workflow = self.workflow(name)?;
        let mut total = 0;
        for rule in &workflow.rules {
            let range = &parts[rule.category];
            let (taken, left) = split(range, &rule.accepts);
            if let Some(taken) = taken {
                let mut branch = parts.clone();
                branch[rule.category] = taken;
                total += self.combinations(rule.target, branch, depth + 1)?;
            }
            match left {
                Some(left) => parts[rule.category] = left,
                None => return Ok(total),
            }
        }
        Ok(total + self.combinations(workflow.fallback, parts, depth + 1)?)
    }
}

/// Splits `range` into the ratings `accepts` lets through and the rest.
/// Rules compare against a single bound, so the rest is always one range.
fn split(range: &Range<u64>, accepts: &Range<u64>) -> (Option<Range<u64>>, Option<Range<u64>>) {
    let taken = intersect(range, accepts);
    let left = [
        intersect(range, &(0..accepts.start)),
        intersect(range, &(accepts.end..u64::MAX)),
    ]
    .into_iter()
    .flatten()
    .next();
    (taken, left)
}

fn intersect(a: &Range<u64>, b: &Range<u64>) -> Option<Range<u64>> {
    let overlap = a.start.max(b.start)..a.end.min(b.end);
    (!overlap.is_empty()).then_some(overlap)
}

/// Sum of the ratings of every accepted part.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let system = System::parse(input)?;
    let mut total = 0;
    for part in &system.parts {
        if system.accepts(part)? {
            total += part.iter().sum::<u64>();
        }
    }
    Ok(total.to_string())
}

/// Distinct rating combinations from 1 to 4000 that would be accepted.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let system = System::parse(input)?;
    let all: Parts = std::array::from_fn(|_| RATINGS);
    Ok(system.combinations(START, all, 0)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "\
px{a<2006:qkq,m>2090:A,rfg}
pv{a>1716:R,A}
lnx{m>1548:A,A}
rfg{s<537:gd,x>2440:R,A}
qs{s>3448:A,lnx}
qkq{x<1416:A,crn}
crn{x>2662:A,R}
in{s<1351:px,qqz}
qqz{s>2770:qs,m<1801:hdj,R}
gd{a>3333:R,R}
hdj{m>838:A,pv}

{x=787,m=2655,a=1222,s=2876}
{x=1679,m=44,a=2067,s=496}
{x=2036,m=264,a=79,s=2244}
{x=2461,m=1339,a=466,s=291}
{x=2127,m=1623,a=2188,s=1013}";

    #[rstest]
    #[case(0..100, 100..200, None)]
    #[case(50..150, 100..200, Some(100..150))]
    #[case(0..50, 51..100, None)]
    #[case(0..100, 50..150, Some(50..100))]
    fn test_intersect(
        #[case] a: Range<u64>,
        #[case] b: Range<u64>,
        #[case] expected: Option<Range<u64>>,
    ) {
        assert_eq!(expected, intersect(&a, &b));
        assert_eq!(expected, intersect(&b, &a));
    }

    #[rstest]
    #[case(1..4001, 0..1351, Some(1..1351), Some(1351..4001))]
    #[case(1..4001, 2091..u64::MAX, Some(2091..4001), Some(1..2091))]
    #[case(1..100, 200..u64::MAX, None, Some(1..100))]
    fn test_split(
        #[case] range: Range<u64>,
        #[case] accepts: Range<u64>,
        #[case] taken: Option<Range<u64>>,
        #[case] left: Option<Range<u64>>,
    ) {
        assert_eq!((taken, left), split(&range, &accepts));
    }

    #[test]
    fn test_parse() -> Result<()> {
        let system = System::parse(INPUT)?;
        assert_eq!(11, system.workflows.len());
        assert_eq!(vec![787, 2655, 1222, 2876], system.parts[0].to_vec());
        let px = system.workflow("px")?;
        assert_eq!(
            Rule { category: 1, accepts: 2091..u64::MAX, target: "A" },
            px.rules[1]
        );
        assert_eq!("rfg", px.fallback);
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("19114", part1(INPUT)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("167409079868000", part2(INPUT)?);
        Ok(())
    }
}
