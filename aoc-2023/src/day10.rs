use std::collections::HashSet;

use glam::IVec2;
use miette::{miette, Result};

/// North, south, west, east.
const DIRECTIONS: [IVec2; 4] = [IVec2::NEG_Y, IVec2::Y, IVec2::NEG_X, IVec2::X];
const NORTH: usize = 0;

/// Which of the four directions a tile opens towards.
fn openings(tile: u8) -> [bool; 4] {
    match tile {
        b'|' => [true, true, false, false],
        b'-' => [false, false, true, true],
        b'L' => [true, false, false, true],
        b'J' => [true, false, true, false],
        b'7' => [false, true, true, false],
        b'F' => [false, true, false, true],
        _ => [false; 4],
    }
}

fn opposite(direction: usize) -> usize {
    direction ^ 1
}

struct Sketch {
    tiles: Vec<Vec<u8>>,
    start: IVec2,
}

impl Sketch {
    fn parse(input: &str) -> Result<Self> {
        let tiles = input
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .collect::<Vec<_>>();
        let start = tiles
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                let x = row.iter().position(|&t| t == b'S')?;
                Some(IVec2::new(x as i32, y as i32))
            })
            .ok_or_else(|| miette!("Sketch has no starting tile S"))?;
        let mut sketch = Self { tiles, start };
        let shape = sketch.start_shape()?;
        sketch.tiles[start.y as usize][start.x as usize] = shape;
        Ok(sketch)
    }

    fn tile(&self, p: IVec2) -> u8 {
        usize::try_from(p.y)
            .ok()
            .zip(usize::try_from(p.x).ok())
            .and_then(|(y, x)| self.tiles.get(y)?.get(x).copied())
            .unwrap_or(b'.')
    }

    /// The pipe hidden under S, from the neighbours that open back towards it.
    fn start_shape(&self) -> Result<u8> {
        let mut connected = [false; 4];
        for (d, step) in DIRECTIONS.iter().enumerate() {
            connected[d] = openings(self.tile(self.start + *step))[opposite(d)];
        }
        b"|-LJ7F"
            .iter()
            .copied()
            .find(|&t| openings(t) == connected)
            .ok_or_else(|| miette!("Start connects to {connected:?}, which is not a pipe"))
    }

    /// Tiles of the main loop, starting at S.
    fn main_loop(&self) -> Result<Vec<IVec2>> {
        let first = openings(self.tile(self.start))
            .iter()
            .position(|&open| open)
            .ok_or_else(|| miette!("Start is not a pipe"))?;
        let mut route = vec![self.start];
        let (mut at, mut came_from) = (self.start + DIRECTIONS[first], opposite(first));
        while at != self.start {
            route.push(at);
            let next = openings(self.tile(at))
                .iter()
                .enumerate()
                .position(|(d, &open)| open && d != came_from)
                .ok_or_else(|| miette!("Loop breaks at {at}"))?;
            at += DIRECTIONS[next];
            came_from = opposite(next);
        }
        Ok(route)
    }

    /// Loop walls crossed by a ray cast west from `point`. Only tiles
    /// opening north count, so a ray grazing a horizontal run crosses once
    /// for `L-7` and not at all for `L-J`.
    fn walls_hit(&self, route: &HashSet<IVec2>, point: IVec2) -> usize {
        (0..point.x)
            .map(|x| IVec2::new(x, point.y))
            .filter(|p| route.contains(p) && openings(self.tile(*p))[NORTH])
            .count()
    }
}

/// Steps to the point of the loop farthest from the start.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let route = Sketch::parse(input)?.main_loop()?;
    Ok((route.len() / 2).to_string())
}

/// Tiles enclosed by the loop.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let sketch = Sketch::parse(input)?;
    let route = sketch.main_loop()?.into_iter().collect::<HashSet<_>>();
    let mut inside = 0;
    for (y, row) in sketch.tiles.iter().enumerate() {
        for x in 0..row.len() {
            let p = IVec2::new(x as i32, y as i32);
            if !route.contains(&p) && sketch.walls_hit(&route, p) % 2 == 1 {
                inside += 1;
            }
        }
    }
    tracing::debug!(walls = route.len(), inside);
    Ok(inside.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SQUARE: &str = "\
.....
.S-7.
.|.|.
.L-J.
.....";

    const WINDING: &str = "\
..F7.
.FJ|.
SJ.L7
|F--J
LJ...";

    const ROOMS: &str = "\
..........
.S------7.
.|F----7|.
.||....||.
.||....||.
.|L-7F-J|.
.|..||..|.
.L--JL--J.
..........";

    const LARGER: &str = "\
.F----7F7F7F7F-7....
.|F--7||||||||FJ....
.||.FJ||||||||L7....
FJL7L7LJLJ||LJ.L-7..
L--J.L7...LJS7F-7L7.
....F-J..F7FJ|L7L7L7
....L7.F7||L7|.L7L7|
.....|FJLJ|FJ|F7|.LJ
....FJL-7.||.||||...
....L---J.LJ.LJLJ...";

    const JUNK: &str = "\
FF7FSF7F7F7F7F7F---7
L|LJ||||||||||||F--J
FL-7LJLJ||||||LJL-77
F--JF--7||LJLJ7F7FJ-
L---JF-JLJ.||-FJLJJ7
|F|F-JF---7F7-L7L|7|
|FFJF7L7F-JF7|JL---7
7-L-JL7||F7|L7F-7F7|
L.L7LFJ|||||FJL7||LJ
L7JLJL-JLJLJL--JLJ.L";

    #[rstest]
    #[case(SQUARE, "4")]
    #[case(WINDING, "8")]
    fn test_part1(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part1(input)?);
        Ok(())
    }

    #[rstest]
    #[case(ROOMS, "4")]
    #[case(LARGER, "8")]
    #[case(JUNK, "10")]
    fn test_part2(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part2(input)?);
        Ok(())
    }

    #[rstest]
    #[case(ROOMS, 3, 3, 2)]
    #[case(ROOMS, 7, 4, 2)]
    #[case(ROOMS, 3, 6, 1)]
    #[case(ROOMS, 6, 6, 3)]
    #[case(ROOMS, 3, 0, 0)]
    #[case(ROOMS, 9, 4, 4)]
    #[case(ROOMS, 9, 5, 4)]
    #[case(LARGER, 3, 2, 2)]
    #[case(LARGER, 6, 6, 1)]
    #[case(LARGER, 14, 3, 11)]
    fn test_walls_hit(
        #[case] input: &str,
        #[case] x: i32,
        #[case] y: i32,
        #[case] expected: usize,
    ) -> Result<()> {
        let sketch = Sketch::parse(input)?;
        let route = sketch.main_loop()?.into_iter().collect::<HashSet<_>>();
        assert_eq!(expected, sketch.walls_hit(&route, IVec2::new(x, y)));
        Ok(())
    }

    #[test]
    fn test_start_shape() -> Result<()> {
        assert_eq!(b'F', Sketch::parse(SQUARE)?.tile(IVec2::new(1, 1)));
        assert_eq!(b'F', Sketch::parse(WINDING)?.tile(IVec2::new(0, 2)));
        Ok(())
    }
}
