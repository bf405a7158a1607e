use miette::{miette, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Shape {
    fn from_index(i: u8) -> Self {
        match i % 3 {
            0 => Shape::Rock,
            1 => Shape::Paper,
            _ => Shape::Scissors,
        }
    }

    fn score(self) -> u32 {
        self as u32 + 1
    }

    /// 0 for a loss, 3 for a draw, 6 for a win.
    fn outcome(self, opponent: Shape) -> u32 {
        match (3 + self as u8 - opponent as u8) % 3 {
            0 => 3,
            1 => 6,
            _ => 0,
        }
    }
}

fn parse_input(input: &str) -> Result<Vec<(u8, u8)>> {
    input
        .lines()
        .map(|line| match line.trim().as_bytes() {
            [a @ b'A'..=b'C', b' ', x @ b'X'..=b'Z'] => Ok((a - b'A', x - b'X')),
            _ => Err(miette!("Malformed round {line:?}")),
        })
        .collect()
}

/// Total score reading the second column as the shape to play.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let total: u32 = parse_input(input)?
        .into_iter()
        .map(|(a, x)| {
            let (opponent, own) = (Shape::from_index(a), Shape::from_index(x));
            own.score() + own.outcome(opponent)
        })
        .sum();
    Ok(total.to_string())
}

/// Total score reading the second column as the result to reach.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let total: u32 = parse_input(input)?
        .into_iter()
        .map(|(a, x)| {
            // X loses (opponent - 1), Y draws, Z wins (opponent + 1)
            let own = Shape::from_index(a + x + 2);
            own.score() + own.outcome(Shape::from_index(a))
        })
        .sum();
    Ok(total.to_string())
}
