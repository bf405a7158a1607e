use miette::{miette, Result};

const TREE: u8 = b'#';

/// The slopes checked in part 2, as (right, down).
const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

struct Forest<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Forest<'a> {
    fn parse(input: &'a str) -> Result<Self> {
        let rows = input.lines().map(str::as_bytes).collect::<Vec<_>>();
        let width = rows.first().map_or(0, |r| r.len());
        if width == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(miette!("Forest map must be a non-empty rectangle"));
        }
        Ok(Self { rows })
    }

    /// Trees hit going down from the top-left corner; the pattern repeats to the right.
    fn trees_on_slope(&self, right: usize, down: usize) -> usize {
        self.rows
            .iter()
            .step_by(down)
            .enumerate()
            .filter(|(step, row)| row[(step * right) % row.len()] == TREE)
            .count()
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let forest = Forest::parse(input)?;
    Ok(forest.trees_on_slope(3, 1).to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let forest = Forest::parse(input)?;
    let product = SLOPES
        .iter()
        .map(|&(right, down)| forest.trees_on_slope(right, down))
        .inspect(|trees| tracing::debug!(trees))
        .product::<usize>();
    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("7", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("336", part2(EXAMPLE)?);
        Ok(())
    }

    #[rstest]
    #[case(1, 1, 2)]
    #[case(3, 1, 7)]
    #[case(5, 1, 3)]
    #[case(7, 1, 4)]
    #[case(1, 2, 2)]
    fn test_trees_on_slope(#[case] right: usize, #[case] down: usize, #[case] expected: usize) -> Result<()> {
        let forest = Forest::parse(EXAMPLE)?;
        assert_eq!(expected, forest.trees_on_slope(right, down));
        Ok(())
    }
}
