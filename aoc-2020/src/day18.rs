use miette::{miette, Result};
use nom::{
    branch::alt,
    character::complete::{char, one_of, u64},
    combinator::all_consuming,
    multi::fold_many0,
    sequence::{delimited, pair},
    IResult,
};

/// Operator precedence used while evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Precedence {
    /// `+` and `*` bind equally, left to right.
    Flat,
    /// `+` binds tighter than `*`.
    AdditionFirst,
}

fn apply(lhs: u64, op: char, rhs: u64) -> u64 {
    match op {
        '+' => lhs + rhs,
        _ => lhs * rhs,
    }
}

fn atom(input: &str, precedence: Precedence) -> IResult<&str, u64> {
    alt((
        u64,
        delimited(char('('), |i| expression(i, precedence), char(')')),
    ))(input)
}

/// atom (op atom)*, folding left; `ops` decides which operators this level handles.
fn chain<'a>(
    input: &'a str,
    ops: &'static str,
    operand: impl Fn(&'a str) -> IResult<&'a str, u64> + Copy,
) -> IResult<&'a str, u64> {
    let (input, first) = operand(input)?;
    fold_many0(
        pair(one_of(ops), operand),
        move || first,
        |acc, (op, value)| apply(acc, op, value),
    )(input)
}

fn expression(input: &str, precedence: Precedence) -> IResult<&str, u64> {
    match precedence {
        Precedence::Flat => chain(input, "+*", move |i| atom(i, precedence)),
        Precedence::AdditionFirst => chain(input, "*", move |i| {
            chain(i, "+", move |j| atom(j, precedence))
        }),
    }
}

fn evaluate(line: &str, precedence: Precedence) -> Result<u64> {
    let compact = line.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    let (_, value) = all_consuming(|i| expression(i, precedence))(compact.as_str())
        .map_err(|e| miette!("Failed to evaluate {line:?}: {e}"))?;
    Ok(value)
}

fn sum_lines(input: &str, precedence: Precedence) -> Result<String> {
    let mut sum = 0;
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let value = evaluate(line, precedence)?;
        tracing::trace!(line, value);
        sum += value;
    }
    Ok(sum.to_string())
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    sum_lines(input, Precedence::Flat)
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    sum_lines(input, Precedence::AdditionFirst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1 + 2 * 3 + 4 * 5 + 6", 71, 231)]
    #[case("1 + (2 * 3) + (4 * (5 + 6))", 51, 51)]
    #[case("2 * 3 + (4 * 5)", 26, 46)]
    #[case("5 + (8 * 3 + 9 + 3 * 4 * 3)", 437, 1445)]
    #[case("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))", 12240, 669060)]
    #[case("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2", 13632, 23340)]
    fn test_evaluate(#[case] line: &str, #[case] flat: u64, #[case] addition_first: u64) -> Result<()> {
        assert_eq!(flat, evaluate(line, Precedence::Flat)?);
        assert_eq!(addition_first, evaluate(line, Precedence::AdditionFirst)?);
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("97", part1("1 + 2 * 3 + 4 * 5 + 6\n2 * 3 + (4 * 5)")?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("277", part2("1 + 2 * 3 + 4 * 5 + 6\n2 * 3 + (4 * 5)")?);
        Ok(())
    }

    #[test]
    fn test_unbalanced() {
        assert!(evaluate("(1 + 2", Precedence::Flat).is_err());
        assert!(evaluate("1 - 2", Precedence::Flat).is_err());
    }
}
