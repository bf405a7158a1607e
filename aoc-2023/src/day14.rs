use std::collections::HashMap;

use miette::{miette, Result};

pub const DEFAULT_CYCLES: usize = 1_000_000_000;

const ROUND: u8 = b'O';
const CUBE: u8 = b'#';
const FLOOR: u8 = b'.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    North,
    West,
    South,
    East,
}

/// Rolls every round rock in `line` as far as it goes towards the start
/// (or the end when `to_end`), stopping at cube rocks and other round rocks.
fn roll(line: &mut [u8], to_end: bool) {
    if to_end {
        line.reverse();
    }
    let mut free = 0;
    for i in 0..line.len() {
        match line[i] {
            CUBE => free = i + 1,
            ROUND => {
                line[i] = FLOOR;
                line[free] = ROUND;
                free += 1;
            }
            _ => {}
        }
    }
    if to_end {
        line.reverse();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct Platform {
    tiles: Vec<Vec<u8>>,
}

impl Platform {
    fn parse(input: &str) -> Result<Self> {
        let tiles = input
            .lines()
            .map(|line| line.trim().as_bytes().to_vec())
            .collect::<Vec<_>>();
        let width = tiles.first().map_or(0, Vec::len);
        if let Some(c) = tiles.iter().flatten().find(|c| ![ROUND, CUBE, FLOOR].contains(c)) {
            return Err(miette!("Unexpected tile {:?}", *c as char));
        }
        if tiles.iter().any(|row| row.len() != width) {
            return Err(miette!("Platform rows differ in length"));
        }
        Ok(Self { tiles })
    }

    fn tilt(&mut self, direction: Direction) {
        match direction {
            Direction::West | Direction::East => {
                for row in &mut self.tiles {
                    roll(row, direction == Direction::East);
                }
            }
            Direction::North | Direction::South => {
                let width = self.tiles.first().map_or(0, Vec::len);
                for x in 0..width {
                    let mut column = self.tiles.iter().map(|row| row[x]).collect::<Vec<_>>();
                    roll(&mut column, direction == Direction::South);
                    for (row, tile) in self.tiles.iter_mut().zip(column) {
                        row[x] = tile;
                    }
                }
            }
        }
    }

    fn spin(&mut self) {
        for direction in [Direction::North, Direction::West, Direction::South, Direction::East] {
            self.tilt(direction);
        }
    }

    /// Each round rock weighs its distance from the south edge.
    fn load(&self) -> usize {
        let height = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .map(|(y, row)| (height - y) * row.iter().filter(|&&t| t == ROUND).count())
            .sum()
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut platform = Platform::parse(input)?;
    platform.tilt(Direction::North);
    Ok(platform.load().to_string())
}

/// Load after `cycles` spin cycles, skipping ahead once the platform
/// repeats an earlier arrangement.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str, cycles: usize) -> Result<String> {
    let mut platform = Platform::parse(input)?;
    let mut seen: HashMap<Platform, usize> = HashMap::new();
    let mut loads: Vec<usize> = Vec::new();
    for done in 0..cycles {
        if let Some(&start) = seen.get(&platform) {
            let period = done - start;
            tracing::debug!(start, period, "spin cycle repeats");
            return Ok(loads[start + (cycles - start) % period].to_string());
        }
        seen.insert(platform.clone(), done);
        loads.push(platform.load());
        platform.spin();
    }
    Ok(platform.load().to_string())
}
