use miette::{miette, Result};

const SIDE: usize = 10;

#[derive(Debug, Clone)]
struct Cavern {
    energy: [[u8; SIDE]; SIDE],
}

impl Cavern {
    fn parse(input: &str) -> Result<Self> {
        let mut energy = [[0; SIDE]; SIDE];
        let rows = input.lines().map(str::trim).collect::<Vec<_>>();
        if rows.len() != SIDE || rows.iter().any(|r| r.len() != SIDE) {
            return Err(miette!("Expected a {SIDE}x{SIDE} grid of octopuses"));
        }
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                energy[y][x] = c
                    .to_digit(10)
                    .ok_or_else(|| miette!("Invalid energy level {c:?}"))? as u8;
            }
        }
        Ok(Cavern { energy })
    }

    fn neighbours(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        (-1i32..=1)
            .flat_map(|dy| (-1i32..=1).map(move |dx| (dx, dy)))
            .filter(|&d| d != (0, 0))
            .filter_map(move |(dx, dy)| {
                let nx = usize::try_from(x as i32 + dx).ok().filter(|&n| n < SIDE)?;
                let ny = usize::try_from(y as i32 + dy).ok().filter(|&n| n < SIDE)?;
                Some((nx, ny))
            })
    }

    /// Advances one step and returns how many octopuses flashed.
    fn step(&mut self) -> usize {
        let mut pending = Vec::new();
        for (y, row) in self.energy.iter_mut().enumerate() {
            for (x, e) in row.iter_mut().enumerate() {
                *e += 1;
                if *e == 10 {
                    pending.push((x, y));
                }
            }
        }
        let mut flashes = 0;
        while let Some((x, y)) = pending.pop() {
            flashes += 1;
            for (nx, ny) in Self::neighbours(x, y) {
                let e = &mut self.energy[ny][nx];
                *e += 1;
                if *e == 10 {
                    pending.push((nx, ny));
                }
            }
        }
        for e in self.energy.iter_mut().flatten() {
            if *e > 9 {
                *e = 0;
            }
        }
        flashes
    }
}

/// Total flashes over the first 100 steps.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut cavern = Cavern::parse(input)?;
    let flashes: usize = (0..100).map(|_| cavern.step()).sum();
    Ok(flashes.to_string())
}

/// First step on which every octopus flashes at once.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut cavern = Cavern::parse(input)?;
    let step = (1..)
        .find(|_| cavern.step() == SIDE * SIDE)
        .ok_or_else(|| miette!("Octopuses never synchronise"))?;
    Ok(step.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526";

    #[test]
    fn test_first_steps() -> Result<()> {
        let mut cavern = Cavern::parse(INPUT)?;
        assert_eq!(0, cavern.step());
        assert_eq!(35, cavern.step());
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("1656", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("195", part2(INPUT)?);
        Ok(())
    }
}
