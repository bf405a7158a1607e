use std::collections::HashSet;

use glam::IVec2;
use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{i32, line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, separated_pair},
    IResult,
};

pub const DEFAULT_ROW: i32 = 2_000_000;
pub const DEFAULT_MAX: i32 = 4_000_000;
const TUNING: i64 = 4_000_000;

#[derive(Debug, Clone, Copy)]
struct Sensor {
    position: IVec2,
    beacon: IVec2,
    radius: i32,
}

impl Sensor {
    /// Columns of `row` this sensor rules out, if it reaches that row.
    fn coverage(&self, row: i32) -> Option<(i32, i32)> {
        let reach = self.radius - (self.position.y - row).abs();
        (reach >= 0).then(|| (self.position.x - reach, self.position.x + reach))
    }
}

fn point(input: &str) -> IResult<&str, IVec2> {
    map(
        separated_pair(preceded(tag("x="), i32), tag(", "), preceded(tag("y="), i32)),
        |(x, y)| IVec2::new(x, y),
    )(input)
}

fn sensor(input: &str) -> IResult<&str, Sensor> {
    map(
        separated_pair(
            preceded(tag("Sensor at "), point),
            tag(": closest beacon is at "),
            point,
        ),
        |(position, beacon)| {
            let d = (position - beacon).abs();
            Sensor { position, beacon, radius: d.x + d.y }
        },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Sensor>> {
    let (_, sensors) = all_consuming(separated_list1(line_ending, sensor))(input.trim_end())
        .map_err(|e| miette!("Failed to parse sensors: {e}"))?;
    Ok(sensors)
}

/// Sorted, disjoint, non-adjacent intervals covered on `row`.
fn merged_coverage(sensors: &[Sensor], row: i32) -> Vec<(i32, i32)> {
    let mut spans = sensors
        .iter()
        .filter_map(|s| s.coverage(row))
        .collect::<Vec<_>>();
    spans.sort_unstable();
    let mut merged: Vec<(i32, i32)> = Vec::with_capacity(spans.len());
    for (start, end) in spans {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Positions on `row` where no beacon can be.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str, row: i32) -> Result<String> {
    let sensors = parse_input(input)?;
    let covered = merged_coverage(&sensors, row);
    let beacons = sensors
        .iter()
        .filter(|s| s.beacon.y == row)
        .map(|s| s.beacon.x)
        .collect::<HashSet<_>>();
    let on_row = beacons
        .iter()
        .filter(|&&x| covered.iter().any(|&(a, b)| (a..=b).contains(&x)))
        .count() as i64;
    let total: i64 = covered.iter().map(|&(a, b)| i64::from(b - a + 1)).sum();
    Ok((total - on_row).to_string())
}

/// Tuning frequency of the one spot in `0..=max` no sensor covers.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str, max: i32) -> Result<String> {
    let sensors = parse_input(input)?;
    for row in 0..=max {
        let mut x = 0;
        for (start, end) in merged_coverage(&sensors, row) {
            if start > x {
                break;
            }
            x = x.max(end + 1);
        }
        if x <= max {
            tracing::debug!(x, row, "uncovered");
            return Ok((i64::from(x) * TUNING + i64::from(row)).to_string());
        }
    }
    Err(miette!("Every position up to {max} is covered"))
}
