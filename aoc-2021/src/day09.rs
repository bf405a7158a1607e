use std::collections::HashSet;

use glam::IVec2;
use miette::{miette, Result};

struct Heightmap {
    heights: Vec<Vec<u8>>,
}

impl Heightmap {
    fn parse(input: &str) -> Result<Self> {
        let heights = input
            .lines()
            .map(|line| {
                line.trim()
                    .chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| miette!("Invalid height {c:?}"))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Heightmap { heights })
    }

    fn get(&self, p: IVec2) -> Option<u8> {
        let (x, y) = (usize::try_from(p.x).ok()?, usize::try_from(p.y).ok()?);
        self.heights.get(y)?.get(x).copied()
    }

    fn neighbours(&self, p: IVec2) -> impl Iterator<Item = (IVec2, u8)> + '_ {
        [IVec2::X, IVec2::NEG_X, IVec2::Y, IVec2::NEG_Y]
            .into_iter()
            .filter_map(move |d| self.get(p + d).map(|h| (p + d, h)))
    }

    fn low_points(&self) -> Vec<(IVec2, u8)> {
        self.heights
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(x, &h)| (IVec2::new(x as i32, y as i32), h))
            })
            .filter(|&(p, h)| self.neighbours(p).all(|(_, n)| h < n))
            .collect()
    }

    /// Flood fill from a low point, stopping at height 9.
    fn basin_size(&self, low: IVec2) -> usize {
        let mut seen = HashSet::from([low]);
        let mut stack = vec![low];
        while let Some(p) = stack.pop() {
            for (n, h) in self.neighbours(p) {
                if h != 9 && seen.insert(n) {
                    stack.push(n);
                }
            }
        }
        seen.len()
    }
}

/// Sum of risk levels (height + 1) of all low points.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let map = Heightmap::parse(input)?;
    let risk: u32 = map.low_points().iter().map(|&(_, h)| u32::from(h) + 1).sum();
    Ok(risk.to_string())
}

/// Product of the three largest basin sizes.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let map = Heightmap::parse(input)?;
    let mut sizes = map
        .low_points()
        .iter()
        .map(|&(p, _)| map.basin_size(p))
        .collect::<Vec<_>>();
    if sizes.len() < 3 {
        return Err(miette!("Only {} basins found", sizes.len()));
    }
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    tracing::debug!(basins = sizes.len(), ?sizes);
    Ok(sizes.iter().take(3).product::<usize>().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
2199943210
3987894921
9856789892
8767896789
9899965678";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("15", part1(INPUT)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("1134", part2(INPUT)?);
        Ok(())
    }
}
