use std::collections::HashSet;

use glam::IVec2;
use itertools::Itertools;
use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{char, i32, line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

const SOURCE: IVec2 = IVec2::new(500, 0);
/// Down, down-left, down-right, in the order sand tries them.
const FALLS: [IVec2; 3] = [IVec2::new(0, 1), IVec2::new(-1, 1), IVec2::new(1, 1)];

fn path(input: &str) -> IResult<&str, Vec<IVec2>> {
    separated_list1(
        tag(" -> "),
        map(separated_pair(i32, char(','), i32), |(x, y)| IVec2::new(x, y)),
    )(input)
}

fn parse_input(input: &str) -> Result<HashSet<IVec2>> {
    let (_, paths) = all_consuming(separated_list1(line_ending, path))(input.trim_end())
        .map_err(|e| miette!("Failed to parse rock paths: {e}"))?;
    let mut rock = HashSet::new();
    for (a, b) in paths.iter().flat_map(|p| p.iter().tuple_windows()) {
        let delta = *b - *a;
        if delta.x != 0 && delta.y != 0 {
            return Err(miette!("Rock path {a} -> {b} is diagonal"));
        }
        let step = delta.signum();
        let mut p = *a;
        rock.insert(p);
        while p != *b {
            p += step;
            rock.insert(p);
        }
    }
    Ok(rock)
}

/// Pours sand until it either falls past the lowest rock or, with a floor,
/// blocks the source. Returns the number of units at rest.
fn pour(rock: &HashSet<IVec2>, with_floor: bool) -> Result<usize> {
    let lowest = rock
        .iter()
        .map(|p| p.y)
        .max()
        .ok_or_else(|| miette!("Cave has no rock"))?;
    let floor = lowest + 2;
    let mut blocked = rock.clone();
    let rock_count = blocked.len();
    // Each unit retraces the previous one's path, so keep it.
    let mut trail = vec![SOURCE];
    while let Some(&sand) = trail.last() {
        if !with_floor && sand.y > lowest {
            break;
        }
        match FALLS
            .iter()
            .map(|fall| sand + *fall)
            .find(|next| next.y < floor && !blocked.contains(next))
        {
            Some(next) => trail.push(next),
            None => {
                blocked.insert(sand);
                trail.pop();
            }
        }
    }
    Ok(blocked.len() - rock_count)
}

/// Units of sand at rest before sand flows into the abyss.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(pour(&parse_input(input)?, false)?.to_string())
}

/// Units of sand at rest once the source is blocked, with a floor below.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(pour(&parse_input(input)?, true)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("24", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("93", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_rock() -> Result<()> {
        let rock = parse_input(INPUT)?;
        assert_eq!(20, rock.len());
        assert!(rock.contains(&IVec2::new(498, 5)));
        Ok(())
    }

    #[test]
    fn test_diagonal() {
        assert!(parse_input("0,0 -> 2,2").is_err());
    }
}
