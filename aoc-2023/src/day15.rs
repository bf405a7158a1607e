use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, u8 as focal_length},
    combinator::{all_consuming, map, value},
    sequence::{preceded, tuple},
    IResult,
};

/// Holiday ASCII String Helper algorithm.
pub fn hash(s: &str) -> u8 {
    s.bytes()
        .fold(0u8, |v, c| v.wrapping_add(c).wrapping_mul(17))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Remove,
    Insert(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step<'a> {
    label: &'a str,
    operation: Operation,
}

fn step(input: &str) -> IResult<&str, Step> {
    map(
        tuple((
            alpha1,
            alt((
                value(Operation::Remove, tag("-")),
                map(preceded(tag("="), focal_length), Operation::Insert),
            )),
        )),
        |(label, operation)| Step { label, operation },
    )(input)
}

fn sequence(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split(',').filter(|s| !s.is_empty())
}

/// Sum of the hash of every initialization step.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: u32 = sequence(input).map(|s| u32::from(hash(s))).sum();
    Ok(sum.to_string())
}

/// Focusing power once every step has been applied to the 256 boxes.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut boxes: Vec<Vec<(&str, u8)>> = vec![Vec::new(); 256];
    for s in sequence(input) {
        let (_, Step { label, operation }) =
            all_consuming(step)(s).map_err(|e| miette!("Failed to parse step {s:?}: {e}"))?;
        let lenses = &mut boxes[usize::from(hash(label))];
        let slot = lenses.iter().position(|(l, _)| *l == label);
        match (operation, slot) {
            (Operation::Remove, Some(i)) => {
                lenses.remove(i);
            }
            (Operation::Remove, None) => {}
            (Operation::Insert(f), Some(i)) => lenses[i].1 = f,
            (Operation::Insert(f), None) => lenses.push((label, f)),
        }
    }
    let power: usize = boxes
        .iter()
        .enumerate()
        .flat_map(|(b, lenses)| {
            lenses
                .iter()
                .enumerate()
                .map(move |(slot, (_, f))| (b + 1) * (slot + 1) * usize::from(*f))
        })
        .sum();
    Ok(power.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    #[rstest]
    #[case("H", 200)]
    #[case("HASH", 52)]
    #[case("rn=1", 30)]
    #[case("rn", 0)]
    #[case("cm", 0)]
    #[case("qp", 1)]
    fn test_hash(#[case] s: &str, #[case] expected: u8) {
        assert_eq!(expected, hash(s));
    }

    #[test]
    fn test_step() -> Result<()> {
        let (_, parsed) = step("ot=9").map_err(|e| miette!("{e}"))?;
        assert_eq!(Step { label: "ot", operation: Operation::Insert(9) }, parsed);
        let (_, parsed) = step("cm-").map_err(|e| miette!("{e}"))?;
        assert_eq!(Step { label: "cm", operation: Operation::Remove }, parsed);
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("1320", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("145", part2(INPUT)?);
        Ok(())
    }
}
