use std::collections::HashMap;

use glam::IVec2;
use miette::{miette, Result};

/// A part number candidate and the cells it spans on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Number {
    value: u32,
    row: i32,
    start: i32,
    end: i32,
}

impl Number {
    fn neighbours(&self) -> impl Iterator<Item = IVec2> + '_ {
        (self.row - 1..=self.row + 1)
            .flat_map(move |y| (self.start - 1..=self.end + 1).map(move |x| IVec2::new(x, y)))
    }
}

struct Schematic {
    numbers: Vec<Number>,
    symbols: HashMap<IVec2, char>,
}

impl Schematic {
    fn parse(input: &str) -> Result<Self> {
        let mut numbers = Vec::new();
        let mut symbols = HashMap::new();
        for (y, line) in input.lines().enumerate() {
            let y = y as i32;
            let mut current: Option<Number> = None;
            for (x, c) in line.trim().chars().chain(['.']).enumerate() {
                let x = x as i32;
                match c.to_digit(10) {
                    Some(d) => {
                        let n = current.get_or_insert(Number { value: 0, row: y, start: x, end: x });
                        n.value = n.value * 10 + d;
                        n.end = x;
                    }
                    None => {
                        numbers.extend(current.take());
                        if c != '.' {
                            symbols.insert(IVec2::new(x, y), c);
                        }
                    }
                }
            }
        }
        if numbers.is_empty() {
            return Err(miette!("Schematic has no numbers"));
        }
        Ok(Self { numbers, symbols })
    }
}

/// Sum of numbers adjacent to any symbol.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let schematic = Schematic::parse(input)?;
    let sum: u32 = schematic
        .numbers
        .iter()
        .filter(|n| n.neighbours().any(|p| schematic.symbols.contains_key(&p)))
        .map(|n| n.value)
        .sum();
    Ok(sum.to_string())
}

/// Sum of gear ratios: `*` symbols touching exactly two numbers.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let schematic = Schematic::parse(input)?;
    let mut gears: HashMap<IVec2, Vec<u32>> = HashMap::new();
    for n in &schematic.numbers {
        for p in n.neighbours() {
            if schematic.symbols.get(&p) == Some(&'*') {
                gears.entry(p).or_default().push(n.value);
            }
        }
    }
    let sum: u32 = gears
        .values()
        .filter(|parts| parts.len() == 2)
        .map(|parts| parts[0] * parts[1])
        .sum();
    Ok(sum.to_string())
}
