use std::collections::{HashMap, HashSet};

use itertools::Itertools;
use miette::{miette, Result};

pub const DEFAULT_CYCLES: usize = 6;

type Point<const D: usize> = [i32; D];

/// Active cubes of an unbounded `D`-dimensional Conway grid.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PocketDimension<const D: usize> {
    active: HashSet<Point<D>>,
}

impl<const D: usize> PocketDimension<D> {
    /// The input is the z = 0 (and w = 0) slice.
    fn parse(input: &str) -> Result<Self> {
        let mut active = HashSet::new();
        for (row, line) in input.lines().enumerate() {
            for (col, c) in line.chars().enumerate() {
                match c {
                    '#' => {
                        let mut point = [0; D];
                        point[0] = row as i32;
                        point[1] = col as i32;
                        active.insert(point);
                    }
                    '.' => {}
                    other => return Err(miette!("Unexpected cube state {other:?}")),
                }
            }
        }
        Ok(Self { active })
    }

    fn neighbour_offsets() -> Vec<Point<D>> {
        (0..D)
            .map(|_| -1..=1)
            .multi_cartesian_product()
            .filter(|offset| offset.iter().any(|&d| d != 0))
            .map(|offset| {
                let mut point = [0; D];
                point.copy_from_slice(&offset);
                point
            })
            .collect()
    }

    fn cycle(&self, offsets: &[Point<D>]) -> Self {
        let mut neighbours: HashMap<Point<D>, usize> = HashMap::new();
        for cube in &self.active {
            for offset in offsets {
                let mut neighbour = *cube;
                neighbour.iter_mut().zip(offset).for_each(|(c, d)| *c += d);
                *neighbours.entry(neighbour).or_default() += 1;
            }
        }
        let active = neighbours
            .into_iter()
            .filter(|(point, count)| *count == 3 || (*count == 2 && self.active.contains(point)))
            .map(|(point, _)| point)
            .collect();
        Self { active }
    }

    fn boot(self, cycles: usize) -> Self {
        let offsets = Self::neighbour_offsets();
        (0..cycles).fold(self, |dimension, cycle| {
            let next = dimension.cycle(&offsets);
            tracing::debug!(cycle = cycle + 1, active = next.active.len());
            next
        })
    }
}

fn count_active<const D: usize>(input: &str, cycles: usize) -> Result<String> {
    let dimension = PocketDimension::<D>::parse(input)?;
    Ok(dimension.boot(cycles).active.len().to_string())
}

/// Active cubes after `cycles` in a pocket dimension of any supported
/// number of axes.
#[tracing::instrument(skip(input))]
pub fn active_after(input: &str, dimension: usize, cycles: usize) -> Result<String> {
    match dimension {
        2 => count_active::<2>(input, cycles),
        3 => count_active::<3>(input, cycles),
        4 => count_active::<4>(input, cycles),
        5 => count_active::<5>(input, cycles),
        6 => count_active::<6>(input, cycles),
        _ => Err(miette!("Pocket dimensions need 2 to 6 axes, not {dimension}")),
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    count_active::<3>(input, DEFAULT_CYCLES)
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    count_active::<4>(input, DEFAULT_CYCLES)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = ".#.\n..#\n###";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("112", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("848", part2(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_active_after() -> Result<()> {
        assert_eq!("11", active_after(EXAMPLE, 3, 1)?);
        assert_eq!("5", active_after(EXAMPLE, 3, 0)?);
        assert_eq!("848", active_after(EXAMPLE, 4, DEFAULT_CYCLES)?);
        assert!(active_after(EXAMPLE, 1, 1).is_err());
        Ok(())
    }

    #[test]
    fn test_first_cycle() -> Result<()> {
        let dimension = PocketDimension::<3>::parse(EXAMPLE)?;
        let offsets = PocketDimension::<3>::neighbour_offsets();
        assert_eq!(26, offsets.len());
        assert_eq!(11, dimension.cycle(&offsets).active.len());
        Ok(())
    }
}
