use std::collections::HashMap;

use itertools::Itertools;
use miette::{miette, Result};

/// (has a letter exactly twice, has a letter exactly three times)
fn letter_repeats(id: &str) -> (bool, bool) {
    let counts = id.chars().counts();
    (
        counts.values().any(|&c| c == 2),
        counts.values().any(|&c| c == 3),
    )
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (twos, threes) = input
        .lines()
        .map(letter_repeats)
        .fold((0, 0), |(twos, threes), (two, three)| {
            (twos + two as usize, threes + three as usize)
        });
    Ok((twos * threes).to_string())
}

/// Finds the two ids that differ in exactly one position by bucketing every
/// id under each of its "one letter removed" keys; the first collision wins.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut buckets: HashMap<(usize, String), &str> = HashMap::new();
    for id in input.lines() {
        for position in 0..id.len() {
            let key = format!("{}{}", &id[..position], &id[position + 1..]);
            match buckets.get(&(position, key.clone())) {
                Some(other) if *other != id => return Ok(key),
                _ => {
                    buckets.insert((position, key), id);
                }
            }
        }
    }
    Err(miette!("No pair of ids differs by a single letter"))
}

/// Pairwise comparison of every id against every other.
pub fn part2_pairwise(input: &str) -> Result<String> {
    let ids = input.lines().collect::<Vec<_>>();
    ids.iter()
        .tuple_combinations()
        .find_map(|(a, b)| {
            let differing = a
                .chars()
                .zip(b.chars())
                .positions(|(x, y)| x != y)
                .collect::<Vec<_>>();
            match differing.as_slice() {
                [position] if a.len() == b.len() => {
                    Some(format!("{}{}", &a[..*position], &a[position + 1..]))
                }
                _ => None,
            }
        })
        .ok_or_else(|| miette!("No pair of ids differs by a single letter"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1() -> Result<()> {
        let input = "abcdef\nbababc\nabbcde\nabcccd\naabcdd\nabcdee\nababab";
        assert_eq!("12", part1(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        let input = "abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz";
        assert_eq!("fgij", part2(input)?);
        assert_eq!("fgij", part2_pairwise(input)?);
        Ok(())
    }

    #[test]
    fn test_part2_no_match() {
        assert!(part2("abc\nxyz").is_err());
        assert!(part2_pairwise("abc\nxyz").is_err());
    }

    #[test]
    fn test_letter_repeats() {
        assert_eq!((false, false), letter_repeats("abcdef"));
        assert_eq!((true, true), letter_repeats("bababc"));
        assert_eq!((false, true), letter_repeats("ababab"));
    }
}
