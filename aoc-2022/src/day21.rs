use std::collections::HashMap;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, i64, line_ending, one_of, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, separated_pair, tuple},
    IResult,
};

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Job<'a> {
    Number(i64),
    Math(&'a str, char, &'a str),
}

fn job(input: &str) -> IResult<&str, Job<'_>> {
    alt((
        map(i64, Job::Number),
        map(
            tuple((alpha1, delimited(space1, one_of("+-*/"), space1), alpha1)),
            |(a, op, b)| Job::Math(a, op, b),
        ),
    ))(input)
}

fn parse_input(input: &str) -> Result<HashMap<&str, Job<'_>>> {
    let (_, jobs) = all_consuming(separated_list1(
        line_ending,
        separated_pair(alpha1, tag(": "), job),
    ))(input.trim_end())
    .map_err(|e| miette!("Failed to parse monkeys: {e}"))?;
    Ok(jobs.into_iter().collect())
}

struct Troop<'a> {
    jobs: HashMap<&'a str, Job<'a>>,
}

impl<'a> Troop<'a> {
    fn job(&self, name: &str) -> Result<Job<'a>> {
        self.jobs
            .get(name)
            .copied()
            .ok_or_else(|| miette!("No monkey named {name}"))
    }

    fn yell(&self, name: &str) -> Result<i64> {
        match self.job(name)? {
            Job::Number(n) => Ok(n),
            Job::Math(a, op, b) => {
                let (a, b) = (self.yell(a)?, self.yell(b)?);
                match op {
                    '+' => Ok(a + b),
                    '-' => Ok(a - b),
                    '*' => Ok(a * b),
                    _ if b == 0 => Err(miette!("{name} divides by zero")),
                    _ => Ok(a / b),
                }
            }
        }
    }

    fn depends_on_human(&self, name: &str) -> Result<bool> {
        if name == HUMAN {
            return Ok(true);
        }
        match self.job(name)? {
            Job::Number(_) => Ok(false),
            Job::Math(a, _, b) => Ok(self.depends_on_human(a)? || self.depends_on_human(b)?),
        }
    }

    /// The number `humn` must yell for `name` to yell `target`.
    fn solve_for_human(&self, name: &str, target: i64) -> Result<i64> {
        if name == HUMAN {
            return Ok(target);
        }
        let Job::Math(a, op, b) = self.job(name)? else {
            return Err(miette!("{name} does not depend on {HUMAN}"));
        };
        if self.depends_on_human(a)? {
            let known = self.yell(b)?;
            let needed = match op {
                '+' => Some(target - known),
                '-' => Some(target + known),
                '*' => target.checked_div(known),
                _ => Some(target * known),
            };
            self.solve_for_human(a, needed.ok_or_else(|| miette!("{name} cannot be inverted"))?)
        } else {
            let known = self.yell(a)?;
            let needed = match op {
                '+' => Some(target - known),
                '-' => Some(known - target),
                '*' => target.checked_div(known),
                _ => known.checked_div(target),
            };
            self.solve_for_human(b, needed.ok_or_else(|| miette!("{name} cannot be inverted"))?)
        }
    }
}

/// The number the root monkey yells.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let troop = Troop { jobs: parse_input(input)? };
    Ok(troop.yell(ROOT)?.to_string())
}

/// The number to yell so both sides of root are equal.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let troop = Troop { jobs: parse_input(input)? };
    let Job::Math(a, _, b) = troop.job(ROOT)? else {
        return Err(miette!("{ROOT} must compare two monkeys"));
    };
    let (unknown, known) = if troop.depends_on_human(a)? { (a, b) } else { (b, a) };
    let target = troop.yell(known)?;
    let answer = troop.solve_for_human(unknown, target)?;
    tracing::debug!(target, answer);
    Ok(answer.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
root: pppw + sjmn
dbpl: 5
cczh: sllz + lgvd
zczc: 2
ptdq: humn - dvpt
dvpt: 3
lfqf: 4
humn: 5
ljgn: 2
sjmn: drzm * dbpl
sllz: 4
pppw: cczh / lfqf
lgvd: ljgn * ptdq
drzm: hmdt - zczc
hmdt: 32";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("152", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("301", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_missing_monkey() -> Result<()> {
        let troop = Troop { jobs: parse_input("root: aaaa + bbbb\naaaa: 1")? };
        assert!(troop.yell(ROOT).is_err());
        Ok(())
    }
}
