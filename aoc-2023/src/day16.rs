use std::collections::HashSet;

use glam::IVec2;
use miette::{miette, Result};
use rayon::prelude::*;

struct Contraption {
    tiles: Vec<Vec<u8>>,
    size: IVec2,
}

impl Contraption {
    fn parse(input: &str) -> Result<Self> {
        let tiles = input
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .collect::<Vec<_>>();
        let width = tiles.first().map_or(0, Vec::len);
        if width == 0 || tiles.iter().any(|row| row.len() != width) {
            return Err(miette!("Contraption must be a non-empty rectangle"));
        }
        if let Some(c) = tiles.iter().flatten().find(|c| !b"./\\|-".contains(c)) {
            return Err(miette!("Unexpected tile {:?}", *c as char));
        }
        let size = IVec2::new(width as i32, tiles.len() as i32);
        Ok(Self { tiles, size })
    }

    fn contains(&self, p: IVec2) -> bool {
        p.cmpge(IVec2::ZERO).all() && p.cmplt(self.size).all()
    }

    /// Directions a beam leaves `tile` in after entering it heading `dir`.
    fn deflect(tile: u8, dir: IVec2) -> Vec<IVec2> {
        match tile {
            b'/' => vec![IVec2::new(-dir.y, -dir.x)],
            b'\\' => vec![IVec2::new(dir.y, dir.x)],
            b'|' if dir.x != 0 => vec![IVec2::NEG_Y, IVec2::Y],
            b'-' if dir.y != 0 => vec![IVec2::NEG_X, IVec2::X],
            _ => vec![dir],
        }
    }

    /// Tiles energized by a beam entering at `start` heading `dir`.
    fn energized(&self, start: IVec2, dir: IVec2) -> usize {
        let mut seen = HashSet::new();
        let mut beams = vec![(start, dir)];
        while let Some((p, d)) = beams.pop() {
            if !self.contains(p) || !seen.insert((p, d)) {
                continue;
            }
            let tile = self.tiles[p.y as usize][p.x as usize];
            beams.extend(Self::deflect(tile, d).into_iter().map(|next| (p + next, next)));
        }
        seen.into_iter().map(|(p, _)| p).collect::<HashSet<_>>().len()
    }

    fn entries(&self) -> Vec<(IVec2, IVec2)> {
        let (w, h) = (self.size.x, self.size.y);
        (0..h)
            .flat_map(|y| [(IVec2::new(0, y), IVec2::X), (IVec2::new(w - 1, y), IVec2::NEG_X)])
            .chain((0..w).flat_map(|x| {
                [(IVec2::new(x, 0), IVec2::Y), (IVec2::new(x, h - 1), IVec2::NEG_Y)]
            }))
            .collect()
    }
}

/// Tiles energized by the beam entering the top-left corner heading right.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let contraption = Contraption::parse(input)?;
    Ok(contraption.energized(IVec2::ZERO, IVec2::X).to_string())
}

/// Most tiles energized by a beam entering from any edge tile.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let contraption = Contraption::parse(input)?;
    contraption
        .entries()
        .into_par_iter()
        .map(|(p, d)| contraption.energized(p, d))
        .max()
        .map(|n| n.to_string())
        .ok_or_else(|| miette!("Contraption has no edge"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = r".|...\....
|.-.\.....
.....|-...
........|.
..........
.........\
..../.\\..
.-.-/..|..
.|....-|.\
..//.|....";

    #[rstest]
    #[case(b'/', IVec2::X, vec![IVec2::NEG_Y])]
    #[case(b'/', IVec2::Y, vec![IVec2::NEG_X])]
    #[case(b'\\', IVec2::X, vec![IVec2::Y])]
    #[case(b'|', IVec2::Y, vec![IVec2::Y])]
    #[case(b'-', IVec2::Y, vec![IVec2::NEG_X, IVec2::X])]
    fn test_deflect(#[case] tile: u8, #[case] dir: IVec2, #[case] expected: Vec<IVec2>) {
        assert_eq!(expected, Contraption::deflect(tile, dir));
    }

    #[test]
    fn test_from_middle() -> Result<()> {
        let contraption = Contraption::parse(INPUT)?;
        assert_eq!(51, contraption.energized(IVec2::new(3, 0), IVec2::Y));
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("46", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("51", part2(INPUT)?);
        Ok(())
    }
}
