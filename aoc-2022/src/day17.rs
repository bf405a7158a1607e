use std::collections::{hash_map::Entry, HashMap};

use miette::{miette, Result};

const WIDTH: u32 = 7;
/// Rows of the chamber top compared when looking for a repeat.
const SKYLINE: usize = 32;

/// Rock shapes bottom row first, bit `x` set for column `x`.
const ROCKS: [[u8; 4]; 5] = [
    [0b1111, 0, 0, 0],
    [0b010, 0b111, 0b010, 0],
    [0b111, 0b100, 0b100, 0],
    [0b1, 0b1, 0b1, 0b1],
    [0b11, 0b11, 0, 0],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Jet {
    Left,
    Right,
}

fn parse_input(input: &str) -> Result<Vec<Jet>> {
    let jets = input
        .trim()
        .chars()
        .map(|c| match c {
            '<' => Ok(Jet::Left),
            '>' => Ok(Jet::Right),
            other => Err(miette!("Unexpected jet {other:?}")),
        })
        .collect::<Result<Vec<_>>>()?;
    if jets.is_empty() {
        return Err(miette!("No jets"));
    }
    Ok(jets)
}

struct Chamber {
    rows: Vec<u8>,
    jets: Vec<Jet>,
    jet: usize,
    rocks: usize,
}

impl Chamber {
    fn new(jets: Vec<Jet>) -> Self {
        Self { rows: Vec::new(), jets, jet: 0, rocks: 0 }
    }

    fn collides(&self, rock: &[u8; 4], y: usize) -> bool {
        rock.iter()
            .enumerate()
            .any(|(i, row)| self.rows.get(y + i).is_some_and(|r| r & row != 0))
    }

    fn push(rock: [u8; 4], jet: Jet) -> Option<[u8; 4]> {
        let edge = match jet {
            Jet::Left => 1,
            Jet::Right => 1 << (WIDTH - 1),
        };
        if rock.iter().any(|row| row & edge != 0) {
            return None;
        }
        Some(rock.map(|row| match jet {
            Jet::Left => row >> 1,
            Jet::Right => row << 1,
        }))
    }

    fn drop_rock(&mut self) {
        let mut rock = ROCKS[self.rocks % ROCKS.len()].map(|row| row << 2);
        let mut y = self.rows.len() + 3;
        loop {
            let jet = self.jets[self.jet];
            self.jet = (self.jet + 1) % self.jets.len();
            if let Some(pushed) = Self::push(rock, jet).filter(|r| !self.collides(r, y)) {
                rock = pushed;
            }
            if y == 0 || self.collides(&rock, y - 1) {
                break;
            }
            y -= 1;
        }
        for (i, row) in rock.into_iter().enumerate().filter(|(_, row)| *row != 0) {
            if self.rows.len() <= y + i {
                self.rows.resize(y + i + 1, 0);
            }
            self.rows[y + i] |= row;
        }
        self.rocks += 1;
    }

    /// What decides every later rock: next shape, next jet and the top rows.
    fn state(&self) -> Option<(usize, usize, Vec<u8>)> {
        let top = self.rows.len().checked_sub(SKYLINE)?;
        Some((self.rocks % ROCKS.len(), self.jet, self.rows[top..].to_vec()))
    }
}

/// Tower height after `total` rocks. Once the chamber repeats a state,
/// whole periods are skipped and only the remainder is simulated.
fn tower_height(input: &str, total: usize) -> Result<usize> {
    let mut chamber = Chamber::new(parse_input(input)?);
    let mut seen = HashMap::new();
    let mut skipped = None;
    while chamber.rocks < total {
        chamber.drop_rock();
        if skipped.is_some() {
            continue;
        }
        let Some(state) = chamber.state() else {
            continue;
        };
        match seen.entry(state) {
            Entry::Occupied(first) => {
                let (rocks, height): (usize, usize) = *first.get();
                let period = chamber.rocks - rocks;
                let cycles = (total - chamber.rocks) / period;
                tracing::debug!(period, growth = chamber.rows.len() - height, cycles, "repeat found");
                chamber.rocks += cycles * period;
                skipped = Some(cycles * (chamber.rows.len() - height));
            }
            Entry::Vacant(slot) => {
                slot.insert((chamber.rocks, chamber.rows.len()));
            }
        }
    }
    Ok(chamber.rows.len() + skipped.unwrap_or(0))
}

/// Tower height after 2022 rocks.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(tower_height(input, 2022)?.to_string())
}

/// Tower height after a trillion rocks.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(tower_height(input, 1_000_000_000_000)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("3068", part1(INPUT)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("1514285714288", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_first_rocks() -> Result<()> {
        let mut chamber = Chamber::new(parse_input(INPUT)?);
        chamber.drop_rock();
        // The flat rock lands one column right of the spawn point.
        assert_eq!(vec![0b111100], chamber.rows);
        chamber.drop_rock();
        assert_eq!(4, chamber.rows.len());
        Ok(())
    }

    #[test]
    fn test_short_tower_matches_skipping() -> Result<()> {
        let mut chamber = Chamber::new(parse_input(INPUT)?);
        for _ in 0..2022 {
            chamber.drop_rock();
        }
        assert_eq!(3068, chamber.rows.len());
        Ok(())
    }
}
