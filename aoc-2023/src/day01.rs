use miette::{miette, Result};

const WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// The digit starting at the head of `s`, if any.
fn digit_at(s: &str, spelled: bool) -> Option<u32> {
    let first = s.chars().next()?;
    if let Some(d) = first.to_digit(10) {
        return Some(d);
    }
    if !spelled {
        return None;
    }
    WORDS
        .iter()
        .position(|w| s.starts_with(w))
        .map(|i| i as u32 + 1)
}

fn calibration(line: &str, spelled: bool) -> Result<u32> {
    // Spelled digits may overlap ("twone"), so scan every suffix.
    let mut digits = (0..line.len())
        .filter(|&i| line.is_char_boundary(i))
        .filter_map(|i| digit_at(&line[i..], spelled));
    let first = digits
        .next()
        .ok_or_else(|| miette!("No digit in {line:?}"))?;
    let last = digits.last().unwrap_or(first);
    Ok(first * 10 + last)
}

fn sum(input: &str, spelled: bool) -> Result<String> {
    let total = input
        .lines()
        .map(|line| calibration(line.trim(), spelled))
        .sum::<Result<u32>>()?;
    Ok(total.to_string())
}

/// Calibration sum from numeric digits only.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    sum(input, false)
}

/// Calibration sum counting spelled-out digits too.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    sum(input, true)
}
