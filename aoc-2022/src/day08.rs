use miette::{miette, Result};

struct Forest {
    heights: Vec<Vec<u8>>,
}

impl Forest {
    fn parse(input: &str) -> Result<Self> {
        let heights = input
            .lines()
            .map(|line| {
                line.trim()
                    .bytes()
                    .map(|c| match c {
                        b'0'..=b'9' => Ok(c - b'0'),
                        _ => Err(miette!("Unexpected tree height {:?}", c as char)),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        if heights.is_empty() || heights.iter().any(|row| row.len() != heights[0].len()) {
            return Err(miette!("Forest must be a non-empty rectangle"));
        }
        Ok(Self { heights })
    }

    /// Lines of sight from a tree to each edge, nearest tree first.
    fn sightlines(&self, row: usize, col: usize) -> [Vec<u8>; 4] {
        let line = &self.heights[row];
        let column = self.heights.iter().map(|r| r[col]);
        [
            line[..col].iter().rev().copied().collect(),
            line[col + 1..].to_vec(),
            column.clone().take(row).collect::<Vec<_>>().into_iter().rev().collect(),
            column.skip(row + 1).collect(),
        ]
    }

    fn trees(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.heights.len()).flat_map(move |r| (0..self.heights[r].len()).map(move |c| (r, c)))
    }
}

/// Trees visible from outside the grid.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let forest = Forest::parse(input)?;
    let visible = forest
        .trees()
        .filter(|&(r, c)| {
            let tree = forest.heights[r][c];
            forest
                .sightlines(r, c)
                .iter()
                .any(|sight| sight.iter().all(|&h| h < tree))
        })
        .count();
    Ok(visible.to_string())
}

/// Highest scenic score: the product of viewing distances in four directions.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let forest = Forest::parse(input)?;
    let best = forest
        .trees()
        .map(|(r, c)| {
            let tree = forest.heights[r][c];
            forest
                .sightlines(r, c)
                .iter()
                .map(|sight| match sight.iter().position(|&h| h >= tree) {
                    Some(blocked) => blocked + 1,
                    None => sight.len(),
                })
                .product::<usize>()
        })
        .max()
        .unwrap_or(0);
    Ok(best.to_string())
}
