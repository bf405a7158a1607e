use std::collections::HashMap;

use itertools::Itertools;
use miette::{miette, Result};

/// Segments lit for each digit on an unscrambled display.
const DIGITS: [&str; 10] = [
    "abcefg", "cf", "acdeg", "acdfg", "bcdf", "abdfg", "abdefg", "acf", "abcdefg", "abcdfg",
];

struct Entry<'a> {
    patterns: Vec<&'a str>,
    outputs: Vec<&'a str>,
}

fn parse_input(input: &str) -> Result<Vec<Entry>> {
    input
        .lines()
        .map(|line| {
            let (patterns, outputs) = line
                .split_once(" | ")
                .ok_or_else(|| miette!("Missing separator in {line:?}"))?;
            let patterns = patterns.split_whitespace().collect::<Vec<_>>();
            if patterns.len() != DIGITS.len() {
                return Err(miette!("Expected ten signal patterns in {line:?}"));
            }
            Ok(Entry {
                patterns,
                outputs: outputs.split_whitespace().collect(),
            })
        })
        .collect()
}

/// How many of the ten patterns light each segment.
fn frequencies<'a>(patterns: impl IntoIterator<Item = &'a str>) -> HashMap<char, u32> {
    patterns
        .into_iter()
        .flat_map(str::chars)
        .counts()
        .into_iter()
        .map(|(c, n)| (c, n as u32))
        .collect()
}

/// A digit's fingerprint: the summed frequencies of its segments. Wiring
/// permutes segment names but not how often each is used, and the ten
/// fingerprints are distinct.
fn fingerprint(pattern: &str, freq: &HashMap<char, u32>) -> u32 {
    pattern.chars().filter_map(|c| freq.get(&c)).sum()
}

impl Entry<'_> {
    fn decode(&self, table: &HashMap<u32, usize>) -> Result<usize> {
        let freq = frequencies(self.patterns.iter().copied());
        self.outputs.iter().try_fold(0, |value, output| {
            let digit = table
                .get(&fingerprint(output, &freq))
                .ok_or_else(|| miette!("Cannot decode {output:?}"))?;
            Ok(value * 10 + digit)
        })
    }
}

/// Output digits identifiable by segment count alone: 1, 4, 7 and 8.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let count = parse_input(input)?
        .iter()
        .flat_map(|e| e.outputs.iter())
        .filter(|o| matches!(o.len(), 2 | 3 | 4 | 7))
        .count();
    Ok(count.to_string())
}

/// Sum of every decoded four-digit output.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let canonical = frequencies(DIGITS);
    let table = DIGITS
        .iter()
        .enumerate()
        .map(|(digit, pattern)| (fingerprint(pattern, &canonical), digit))
        .collect::<HashMap<_, _>>();

    let sum = parse_input(input)?
        .iter()
        .map(|entry| entry.decode(&table))
        .sum::<Result<usize>>()?;
    Ok(sum.to_string())
}
