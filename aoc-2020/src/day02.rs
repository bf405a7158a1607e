use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, anychar, char, line_ending, u32},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{separated_pair, terminated, tuple},
    IResult,
};

/// One line of the password database, e.g. `1-3 a: abcde`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry<'a> {
    low: usize,
    high: usize,
    letter: char,
    password: &'a str,
}

impl Entry<'_> {
    /// The letter occurs between `low` and `high` times.
    fn is_valid_by_count(&self) -> bool {
        let count = self.password.chars().filter(|&c| c == self.letter).count();
        (self.low..=self.high).contains(&count)
    }

    /// The letter occurs at exactly one of the two (1-based) positions.
    fn is_valid_by_position(&self) -> bool {
        let at = |position: usize| self.password.chars().nth(position - 1) == Some(self.letter);
        at(self.low) ^ at(self.high)
    }
}

fn entry(input: &str) -> IResult<&str, Entry> {
    let (input, ((low, high), letter, password)) = tuple((
        terminated(separated_pair(u32, char('-'), u32), char(' ')),
        terminated(anychar, tag(": ")),
        alpha1,
    ))(input)?;
    Ok((
        input,
        Entry {
            low: low as usize,
            high: high as usize,
            letter,
            password,
        },
    ))
}

fn parse_input(input: &str) -> Result<Vec<Entry>> {
    let (_, entries) = all_consuming(separated_list1(line_ending, entry))(input)
        .map_err(|e| miette!("Failed to parse password list: {e}"))?;
    Ok(entries)
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let entries = parse_input(input)?;
    Ok(entries.iter().filter(|e| e.is_valid_by_count()).count().to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let entries = parse_input(input)?;
    Ok(entries
        .iter()
        .filter(|e| e.is_valid_by_position())
        .count()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("2", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("1", part2(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_entry_parser() {
        assert_eq!(
            entry("2-7 m: gczbmgk"),
            Ok((
                "",
                Entry {
                    low: 2,
                    high: 7,
                    letter: 'm',
                    password: "gczbmgk"
                }
            ))
        );
        assert!(parse_input("2-7 m gczbmgk").is_err());
    }
}
