use itertools::Itertools;
use miette::{miette, Result};

pub const DEFAULT_FACTOR: u64 = 1_000_000;

/// Galaxies with the width of every row and column: 1 normally, `factor`
/// where the row or column holds no galaxy at all.
#[derive(Debug)]
struct Universe {
    galaxies: Vec<(usize, usize)>,
    row_widths: Vec<u64>,
    column_widths: Vec<u64>,
}

impl Universe {
    fn parse(input: &str, factor: u64) -> Result<Self> {
        let rows = input.lines().map(str::trim).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |r| r.len());
        if rows.iter().any(|r| r.len() != width) {
            return Err(miette!("Image rows differ in length"));
        }
        let galaxies = rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| {
                row.bytes()
                    .enumerate()
                    .filter(|&(_, c)| c == b'#')
                    .map(move |(x, _)| (x, y))
            })
            .collect::<Vec<_>>();
        let widths = |len: usize, occupied: &dyn Fn(usize) -> bool| {
            (0..len)
                .map(|i| if occupied(i) { 1 } else { factor })
                .collect::<Vec<_>>()
        };
        let row_widths = widths(rows.len(), &|y| galaxies.iter().any(|g| g.1 == y));
        let column_widths = widths(width, &|x| galaxies.iter().any(|g| g.0 == x));
        Ok(Self {
            galaxies,
            row_widths,
            column_widths,
        })
    }

    /// Manhattan distance with expanded rows and columns counted at their
    /// full width.
    fn distance(&self, a: (usize, usize), b: (usize, usize)) -> u64 {
        let span = |widths: &[u64], p: usize, q: usize| -> u64 {
            widths[p.min(q)..p.max(q)].iter().sum()
        };
        span(&self.column_widths, a.0, b.0) + span(&self.row_widths, a.1, b.1)
    }

    fn total_distance(&self) -> u64 {
        self.galaxies
            .iter()
            .tuple_combinations()
            .map(|(a, b)| self.distance(*a, *b))
            .sum()
    }
}

/// Sum of distances between every pair of galaxies, with empty rows and
/// columns expanded by `factor`.
#[tracing::instrument(skip(input))]
pub fn expanded_distances(input: &str, factor: u64) -> Result<String> {
    let universe = Universe::parse(input, factor)?;
    tracing::debug!(galaxies = universe.galaxies.len());
    Ok(universe.total_distance().to_string())
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    expanded_distances(input, 2)
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    expanded_distances(input, DEFAULT_FACTOR)
}
