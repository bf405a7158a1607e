use miette::{miette, IntoDiagnostic, Result};

const SIZE: usize = 5;

#[derive(Debug, Clone)]
struct Board {
    numbers: [[u32; SIZE]; SIZE],
    marked: [[bool; SIZE]; SIZE],
}

impl Board {
    fn parse(block: &str) -> Result<Self> {
        let values = block
            .split_whitespace()
            .map(|s| s.parse::<u32>().into_diagnostic())
            .collect::<Result<Vec<_>>>()?;
        if values.len() != SIZE * SIZE {
            return Err(miette!("Board has {} numbers, expected {}", values.len(), SIZE * SIZE));
        }
        let mut numbers = [[0; SIZE]; SIZE];
        for (i, value) in values.into_iter().enumerate() {
            numbers[i / SIZE][i % SIZE] = value;
        }
        Ok(Board {
            numbers,
            marked: [[false; SIZE]; SIZE],
        })
    }

    /// Marks `call` and reports whether that completed a row or column.
    fn mark(&mut self, call: u32) -> bool {
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.numbers[r][c] == call {
                    self.marked[r][c] = true;
                    if self.marked[r].iter().all(|&m| m) || (0..SIZE).all(|i| self.marked[i][c]) {
                        return true;
                    }
                }
            }
        }
        false
    }

    fn unmarked_sum(&self) -> u32 {
        self.numbers
            .iter()
            .flatten()
            .zip(self.marked.iter().flatten())
            .filter(|(_, &m)| !m)
            .map(|(&n, _)| n)
            .sum()
    }
}

fn parse_input(input: &str) -> Result<(Vec<u32>, Vec<Board>)> {
    let (calls, boards) = input
        .split_once("\n\n")
        .ok_or_else(|| miette!("Expected calls followed by boards"))?;
    let calls = calls
        .trim()
        .split(',')
        .map(|s| s.parse::<u32>().into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    let boards = boards
        .split("\n\n")
        .map(Board::parse)
        .collect::<Result<Vec<_>>>()?;
    Ok((calls, boards))
}

/// Final scores in the order boards win.
fn winning_scores(calls: &[u32], mut boards: Vec<Board>) -> Vec<u32> {
    let mut scores = Vec::with_capacity(boards.len());
    for &call in calls {
        boards.retain_mut(|board| {
            if board.mark(call) {
                scores.push(board.unmarked_sum() * call);
                false
            } else {
                true
            }
        });
        if boards.is_empty() {
            break;
        }
    }
    scores
}

/// Score of the first board to win.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (calls, boards) = parse_input(input)?;
    winning_scores(&calls, boards)
        .first()
        .map(|score| score.to_string())
        .ok_or_else(|| miette!("No board ever wins"))
}

/// Score of the last board to win.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (calls, boards) = parse_input(input)?;
    winning_scores(&calls, boards)
        .last()
        .map(|score| score.to_string())
        .ok_or_else(|| miette!("No board ever wins"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("4512", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("1924", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_column_win() -> Result<()> {
        let mut board = Board::parse(
            "1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25",
        )?;
        assert!(!board.mark(3));
        assert!(!board.mark(8));
        assert!(!board.mark(13));
        assert!(!board.mark(18));
        assert!(board.mark(23));
        Ok(())
    }
}
