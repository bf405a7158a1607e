use itertools::Itertools;
use miette::{miette, Result};

/// Bit set of the item types in a run of items.
fn items(s: &str) -> Result<u64> {
    s.bytes().try_fold(0u64, |set, c| {
        let priority = match c {
            b'a'..=b'z' => c - b'a' + 1,
            b'A'..=b'Z' => c - b'A' + 27,
            _ => return Err(miette!("Unknown item {:?}", c as char)),
        };
        Ok(set | 1 << priority)
    })
}

fn priority_of(set: u64) -> Result<u32> {
    match set.count_ones() {
        1 => Ok(set.trailing_zeros()),
        n => Err(miette!("Expected exactly one shared item, found {n}")),
    }
}

/// Priority sum of the item in both compartments of each rucksack.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum = input
        .lines()
        .map(|line| {
            let (left, right) = line.trim().split_at(line.trim().len() / 2);
            priority_of(items(left)? & items(right)?)
        })
        .sum::<Result<u32>>()?;
    Ok(sum.to_string())
}

/// Priority sum of the badge shared by each group of three elves.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let lines = input.lines().map(str::trim).collect::<Vec<_>>();
    if lines.len() % 3 != 0 {
        return Err(miette!("Elves must come in groups of three"));
    }
    let sum = lines
        .iter()
        .tuples()
        .map(|(a, b, c)| priority_of(items(a)? & items(b)? & items(c)?))
        .sum::<Result<u32>>()?;
    Ok(sum.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("157", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("70", part2(INPUT)?);
        Ok(())
    }
}
