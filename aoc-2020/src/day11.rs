use miette::{miette, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Floor,
    Empty,
    Occupied,
}

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Layout {
    cells: Vec<Vec<Cell>>,
}

/// How a seat decides which neighbours count.
#[derive(Debug, Clone, Copy)]
enum Rule {
    /// The eight adjacent cells; a seat empties at four occupied.
    Adjacent,
    /// The first seat visible along each direction; a seat empties at five.
    LineOfSight,
}

impl Layout {
    fn parse(input: &str) -> Result<Self> {
        let cells = input
            .lines()
            .map(|line| {
                line.chars()
                    .map(|c| match c {
                        '.' => Ok(Cell::Floor),
                        'L' => Ok(Cell::Empty),
                        '#' => Ok(Cell::Occupied),
                        other => Err(miette!("Unexpected symbol encountered: {other}")),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { cells })
    }

    fn get(&self, row: isize, col: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        self.cells.get(row)?.get(col).copied()
    }

    fn occupied_neighbours(&self, row: usize, col: usize, rule: Rule) -> usize {
        DIRECTIONS
            .iter()
            .filter(|&&(dr, dc)| {
                let (mut r, mut c) = (row as isize + dr, col as isize + dc);
                loop {
                    match (self.get(r, c), rule) {
                        (Some(Cell::Floor), Rule::LineOfSight) => {
                            r += dr;
                            c += dc;
                        }
                        (cell, _) => return cell == Some(Cell::Occupied),
                    }
                }
            })
            .count()
    }

    fn step(&self, rule: Rule) -> Self {
        let tolerance = match rule {
            Rule::Adjacent => 4,
            Rule::LineOfSight => 5,
        };
        let cells = self
            .cells
            .iter()
            .enumerate()
            .map(|(row, line)| {
                line.iter()
                    .enumerate()
                    .map(|(col, &cell)| match cell {
                        Cell::Empty if self.occupied_neighbours(row, col, rule) == 0 => Cell::Occupied,
                        Cell::Occupied if self.occupied_neighbours(row, col, rule) >= tolerance => {
                            Cell::Empty
                        }
                        other => other,
                    })
                    .collect()
            })
            .collect();
        Self { cells }
    }

    fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&c| c == Cell::Occupied)
            .count()
    }

    fn settle(self, rule: Rule) -> Self {
        let mut current = self;
        loop {
            let next = current.step(rule);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let layout = Layout::parse(input)?;
    Ok(layout.settle(Rule::Adjacent).occupied().to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let layout = Layout::parse(input)?;
    Ok(layout.settle(Rule::LineOfSight).occupied().to_string())
}
