use std::collections::{HashMap, HashSet};

use glam::IVec2;
use miette::{miette, Result};

/// Axial hex coordinates: `x` grows east, `y` grows south-east.
const NEIGHBOURS: [IVec2; 6] = [
    IVec2::new(1, 0),
    IVec2::new(-1, 0),
    IVec2::new(1, -1),
    IVec2::new(0, -1),
    IVec2::new(0, 1),
    IVec2::new(-1, 1),
];

fn step(direction: &str) -> Option<IVec2> {
    let offset = match direction {
        "e" => NEIGHBOURS[0],
        "w" => NEIGHBOURS[1],
        "ne" => NEIGHBOURS[2],
        "nw" => NEIGHBOURS[3],
        "se" => NEIGHBOURS[4],
        "sw" => NEIGHBOURS[5],
        _ => return None,
    };
    Some(offset)
}

/// Follows one line of directions from the reference tile.
fn locate(line: &str) -> Result<IVec2> {
    let mut position = IVec2::ZERO;
    let mut rest = line.trim();
    while !rest.is_empty() {
        let width = if rest.starts_with(['n', 's']) { 2 } else { 1 };
        let direction = rest
            .get(..width)
            .ok_or_else(|| miette!("Truncated direction in {line:?}"))?;
        position += step(direction).ok_or_else(|| miette!("Unknown direction {direction:?}"))?;
        rest = &rest[width..];
    }
    Ok(position)
}

fn initial_black(input: &str) -> Result<HashSet<IVec2>> {
    let mut black = HashSet::new();
    for line in input.lines().filter(|l| !l.trim().is_empty()) {
        let tile = locate(line)?;
        if !black.remove(&tile) {
            black.insert(tile);
        }
    }
    Ok(black)
}

/// One day of the exhibit: black tiles with zero or more than two black
/// neighbours flip to white, white tiles with exactly two flip to black.
fn next_day(black: &HashSet<IVec2>) -> HashSet<IVec2> {
    let mut counts: HashMap<IVec2, usize> = HashMap::new();
    for tile in black {
        for offset in NEIGHBOURS {
            *counts.entry(*tile + offset).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(tile, n)| match black.contains(tile) {
            true => *n == 1 || *n == 2,
            false => *n == 2,
        })
        .map(|(tile, _)| tile)
        .collect()
}

fn simulate(mut black: HashSet<IVec2>, days: usize) -> HashSet<IVec2> {
    for _ in 0..days {
        black = next_day(&black);
    }
    black
}

/// Tiles left black after flipping every listed tile.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(initial_black(input)?.len().to_string())
}

/// Black tiles after 100 days.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let black = simulate(initial_black(input)?, 100);
    Ok(black.len().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "\
sesenwnenenewseeswwswswwnenewsewsw
neeenesenwnwwswnenewnwwsewnenwseswesw
seswneswswsenwwnwse
nwnwneseeswswnenewneswwnewseswneseene
swweswneswnenwsewnwneneseenw
eesenwseswswnenwswnwnwsewwnwsene
sewnenenenesenwsewnenwwwse
wenwwweseeeweswwwnwwe
wsweesenenewnwwnwsenewsenwwsesesenwne
neeswseenwwswnwswswnw
nenwswwsewswnenenewsenwsenwnesesenew
enewnwewneswsewnwswenweswnenwsenwsw
sweneswneswneneenwnewenewwneswswnese
swwesenesewenwneswnwwneseswwne
enesenwswwswneneswsenwnewswseenwsese
wnwnesenesenenwwnenwsewesewsesesew
nenewswnwewswnenesenwnesewesw
eneswnwswnwsenenwnwnwwseeswneewsenese
neswnwewnwnwseenwseesewsenwsweewe
wseweeenwnesenwwwswnew";

    #[test]
    fn test_locate() -> Result<()> {
        assert_eq!(IVec2::ZERO, locate("nwwswee")?);
        assert_eq!(IVec2::new(0, 1), locate("esew")?);
        assert!(locate("ex").is_err());
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("10", part1(INPUT)?);
        Ok(())
    }

    #[rstest]
    #[case(1, 15)]
    #[case(10, 37)]
    #[case(100, 2208)]
    fn test_simulate(#[case] days: usize, #[case] expected: usize) -> Result<()> {
        assert_eq!(expected, simulate(initial_black(INPUT)?, days).len());
        Ok(())
    }
}
