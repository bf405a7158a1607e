use miette::{miette, IntoDiagnostic, Result};

#[derive(Debug)]
struct Schedule {
    earliest: u64,
    /// (offset in the list, bus id) for every bus in service.
    buses: Vec<(u64, u64)>,
}

fn parse_input(input: &str) -> Result<Schedule> {
    let (earliest, ids) = input
        .split_once('\n')
        .ok_or_else(|| miette!("Expected a timestamp line and a bus line"))?;
    let earliest = earliest.trim().parse().into_diagnostic()?;
    let buses = ids
        .trim()
        .split(',')
        .enumerate()
        .filter(|(_, id)| *id != "x")
        .map(|(offset, id)| Ok((offset as u64, id.parse::<u64>().into_diagnostic()?)))
        .collect::<Result<Vec<_>>>()?;
    if buses.is_empty() {
        return Err(miette!("No buses in service"));
    }
    Ok(Schedule { earliest, buses })
}

/// Bus id times minutes waited for the first bus leaving at or after `earliest`.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let schedule = parse_input(input)?;
    let (wait, id) = schedule
        .buses
        .iter()
        .map(|&(_, id)| ((id - schedule.earliest % id) % id, id))
        .min()
        .ok_or_else(|| miette!("No buses in service"))?;
    Ok((wait * id).to_string())
}

/// Earliest t where bus i departs at t + offset_i, by sieving: once a bus
/// lines up, the step grows by its period so it stays lined up.
fn earliest_alignment(buses: &[(u64, u64)]) -> u64 {
    let mut time = 0;
    let mut step = 1;
    for &(offset, id) in buses {
        while (time + offset) % id != 0 {
            time += step;
        }
        step = aoc_common::math::lcm(step, id);
    }
    time
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let schedule = parse_input(input)?;
    Ok(earliest_alignment(&schedule.buses).to_string())
}
