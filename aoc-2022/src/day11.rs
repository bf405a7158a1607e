use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, multispace0, multispace1, u64},
    combinator::{all_consuming, map, value},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add(u64),
    Multiply(u64),
    Square,
}

impl Operation {
    fn apply(self, worry: u64) -> u64 {
        match self {
            Operation::Add(n) => worry + n,
            Operation::Multiply(n) => worry * n,
            Operation::Square => worry * worry,
        }
    }
}

#[derive(Debug, Clone)]
struct Monkey {
    items: Vec<u64>,
    operation: Operation,
    divisor: u64,
    if_true: usize,
    if_false: usize,
}

fn operation(input: &str) -> IResult<&str, Operation> {
    preceded(
        tag("new = old "),
        alt((
            value(Operation::Square, tag("* old")),
            map(preceded(tag("* "), u64), Operation::Multiply),
            map(preceded(tag("+ "), u64), Operation::Add),
        )),
    )(input)
}

fn monkey(input: &str) -> IResult<&str, Monkey> {
    map(
        tuple((
            delimited(tag("Monkey "), u64, char(':')),
            preceded(
                tuple((multispace1, tag("Starting items: "))),
                separated_list1(tag(", "), u64),
            ),
            preceded(tuple((multispace1, tag("Operation: "))), operation),
            preceded(tuple((multispace1, tag("Test: divisible by "))), u64),
            preceded(tuple((multispace1, tag("If true: throw to monkey "))), u64),
            preceded(tuple((multispace1, tag("If false: throw to monkey "))), u64),
        )),
        |(_, items, operation, divisor, if_true, if_false)| Monkey {
            items,
            operation,
            divisor,
            if_true: if_true as usize,
            if_false: if_false as usize,
        },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Monkey>> {
    let (_, monkeys) = all_consuming(delimited(
        multispace0,
        separated_list1(multispace1, monkey),
        multispace0,
    ))(input)
    .map_err(|e| miette!("Failed to parse monkeys: {e}"))?;
    if monkeys
        .iter()
        .any(|m| m.if_true >= monkeys.len() || m.if_false >= monkeys.len() || m.divisor == 0)
    {
        return Err(miette!("Monkey throws to a missing monkey or tests by zero"));
    }
    Ok(monkeys)
}

/// Product of the two largest inspection counts.
///
/// Without relief, worry levels are kept modulo the product of every
/// divisor, which leaves each divisibility test unchanged.
fn monkey_business(input: &str, rounds: usize, relief: u64) -> Result<String> {
    let mut monkeys = parse_input(input)?;
    let modulus: u64 = monkeys.iter().map(|m| m.divisor).product();
    let mut inspected = vec![0u64; monkeys.len()];
    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            let items = std::mem::take(&mut monkeys[i].items);
            inspected[i] += items.len() as u64;
            let Monkey { operation, divisor, if_true, if_false, .. } = monkeys[i];
            for item in items {
                let mut worry = operation.apply(item) / relief;
                if relief == 1 {
                    worry %= modulus;
                }
                let target = if worry % divisor == 0 { if_true } else { if_false };
                monkeys[target].items.push(worry);
            }
        }
    }
    tracing::debug!(?inspected);
    inspected.sort_unstable_by(|a, b| b.cmp(a));
    Ok(inspected.iter().take(2).product::<u64>().to_string())
}

/// Twenty rounds, with worry divided by three after each inspection.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    monkey_business(input, 20, 3)
}

/// Ten thousand rounds with no relief.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    monkey_business(input, 10_000, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
Monkey 0:
  Starting items: 79, 98
  Operation: new = old * 19
  Test: divisible by 23
    If true: throw to monkey 2
    If false: throw to monkey 3

Monkey 1:
  Starting items: 54, 65, 75, 74
  Operation: new = old + 6
  Test: divisible by 19
    If true: throw to monkey 2
    If false: throw to monkey 0

Monkey 2:
  Starting items: 79, 60, 97
  Operation: new = old * old
  Test: divisible by 13
    If true: throw to monkey 1
    If false: throw to monkey 3

Monkey 3:
  Starting items: 74
  Operation: new = old + 3
  Test: divisible by 17
    If true: throw to monkey 0
    If false: throw to monkey 1";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("10605", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("2713310158", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<()> {
        let monkeys = parse_input(INPUT)?;
        assert_eq!(4, monkeys.len());
        assert_eq!(Operation::Square, monkeys[2].operation);
        assert_eq!(vec![54, 65, 75, 74], monkeys[1].items);
        Ok(())
    }
}
