use miette::{miette, Result};

/// A pattern stored twice as bitmasks: once per row and once per column.
#[derive(Debug)]
struct Pattern {
    rows: Vec<u32>,
    columns: Vec<u32>,
}

impl Pattern {
    fn parse(block: &str) -> Result<Self> {
        let lines = block.lines().map(str::trim).collect::<Vec<_>>();
        let width = lines.first().map_or(0, |l| l.len());
        if width == 0 || width > 32 || lines.len() > 32 {
            return Err(miette!("Patterns must be 1 to 32 cells on each side"));
        }
        let mut rows = vec![0; lines.len()];
        let mut columns = vec![0; width];
        for (y, line) in lines.iter().enumerate() {
            if line.len() != width {
                return Err(miette!("Ragged pattern row {line:?}"));
            }
            for (x, c) in line.bytes().enumerate() {
                match c {
                    b'#' => {
                        rows[y] |= 1 << x;
                        columns[x] |= 1 << y;
                    }
                    b'.' => {}
                    _ => return Err(miette!("Unexpected cell {:?}", c as char)),
                }
            }
        }
        Ok(Self { rows, columns })
    }

    /// Number of lines before a reflection that differs from a perfect
    /// mirror in exactly `smudges` cells.
    fn reflection(lines: &[u32], smudges: u32) -> Option<usize> {
        (1..lines.len()).find(|&split| {
            let (before, after) = lines.split_at(split);
            before
                .iter()
                .rev()
                .zip(after)
                .map(|(a, b)| (a ^ b).count_ones())
                .sum::<u32>()
                == smudges
        })
    }

    fn summary(&self, smudges: u32) -> Result<usize> {
        if let Some(rows) = Self::reflection(&self.rows, smudges) {
            return Ok(100 * rows);
        }
        Self::reflection(&self.columns, smudges)
            .ok_or_else(|| miette!("Pattern has no line of reflection with {smudges} smudges"))
    }
}

fn summarize(input: &str, smudges: u32) -> Result<String> {
    let mut total = 0;
    for block in input.split("\n\n") {
        total += Pattern::parse(block)?.summary(smudges)?;
    }
    Ok(total.to_string())
}

/// Columns left of each vertical mirror plus 100 times the rows above
/// each horizontal one.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    summarize(input, 0)
}

/// Same summary once the single smudge in each pattern is cleaned.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    summarize(input, 1)
}
