use aoc_common::bits::{flip, mask};
use miette::{miette, IntoDiagnostic, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rating {
    Oxygen,
    Co2,
}

struct Report {
    numbers: Vec<u64>,
    width: u32,
}

fn parse_input(input: &str) -> Result<Report> {
    let width = input
        .lines()
        .next()
        .map(|line| line.trim().len() as u32)
        .ok_or_else(|| miette!("Empty diagnostic report"))?;
    let numbers = input
        .lines()
        .map(|line| u64::from_str_radix(line.trim(), 2).into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    Ok(Report { numbers, width })
}

/// Most common bit at `position`, with ties going to 1.
fn most_common(numbers: &[u64], position: u32) -> u64 {
    let ones = numbers.iter().filter(|&&n| mask(n, position) == 1).count();
    u64::from(ones * 2 >= numbers.len())
}

fn rating(report: &Report, kind: Rating) -> Result<u64> {
    let mut candidates = report.numbers.clone();
    for position in (0..report.width).rev() {
        if candidates.len() == 1 {
            break;
        }
        let common = most_common(&candidates, position);
        let keep = match kind {
            Rating::Oxygen => common,
            Rating::Co2 => 1 - common,
        };
        let kept = candidates
            .iter()
            .copied()
            .filter(|&n| mask(n, position) == keep)
            .collect::<Vec<_>>();
        // a column where every candidate agrees has no least common bit
        if !kept.is_empty() {
            candidates = kept;
        }
    }
    match candidates[..] {
        [value] => Ok(value),
        _ => Err(miette!("{kind:?} rating left {} candidates", candidates.len())),
    }
}

/// Power consumption: gamma rate times epsilon rate.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let report = parse_input(input)?;
    let gamma = (0..report.width)
        .map(|position| most_common(&report.numbers, position) << position)
        .sum::<u64>();
    let epsilon = flip(gamma, report.width);
    tracing::debug!(gamma, epsilon);
    Ok((gamma * epsilon).to_string())
}

/// Life support rating: oxygen generator times CO2 scrubber rating.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let report = parse_input(input)?;
    let oxygen = rating(&report, Rating::Oxygen)?;
    let co2 = rating(&report, Rating::Co2)?;
    Ok((oxygen * co2).to_string())
}
