use std::collections::HashMap;

use miette::{miette, IntoDiagnostic, Result};

/// Ways three rolls of a three-sided die add up to 3..=9.
const DIRAC_ROLLS: [(u32, u64); 7] = [(3, 1), (4, 3), (5, 6), (6, 7), (7, 6), (8, 3), (9, 1)];

/// Starting positions, from either `4,8` or the two "starting position" lines.
fn parse_input(input: &str) -> Result<[u32; 2]> {
    let starts = input
        .lines()
        .flat_map(|line| line.split(','))
        .filter(|s| !s.trim().is_empty())
        .map(|s| {
            let value = s.rsplit(':').next().unwrap_or(s);
            value.trim().parse::<u32>().into_diagnostic()
        })
        .collect::<Result<Vec<_>>>()?;
    match starts[..] {
        [a, b] if (1..=10).contains(&a) && (1..=10).contains(&b) => Ok([a, b]),
        _ => Err(miette!("Expected two starting positions on a 1-10 track")),
    }
}

fn advance(position: u32, steps: u32) -> u32 {
    (position + steps - 1) % 10 + 1
}

/// Losing score times die rolls, with a deterministic 100-sided die.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut positions = parse_input(input)?;
    let mut scores = [0u32; 2];
    let mut die = (1..=100u32).cycle();
    let mut rolls = 0;
    let mut player = 0;
    loop {
        let steps: u32 = die.by_ref().take(3).sum();
        rolls += 3;
        positions[player] = advance(positions[player], steps);
        scores[player] += positions[player];
        if scores[player] >= 1000 {
            return Ok((scores[1 - player] * rolls).to_string());
        }
        player = 1 - player;
    }
}

type State = (u32, u32, u32, u32);

/// Wins for (player to move, other player) from this state, to 21 points.
fn quantum_wins(state: State, memo: &mut HashMap<State, (u64, u64)>) -> (u64, u64) {
    if let Some(&wins) = memo.get(&state) {
        return wins;
    }
    let (position, score, other_position, other_score) = state;
    let mut wins = (0, 0);
    for (steps, ways) in DIRAC_ROLLS {
        let next = advance(position, steps);
        if score + next >= 21 {
            wins.0 += ways;
        } else {
            let (other, mine) =
                quantum_wins((other_position, other_score, next, score + next), memo);
            wins.0 += mine * ways;
            wins.1 += other * ways;
        }
    }
    memo.insert(state, wins);
    wins
}

/// Universes won by the more successful player with the Dirac die.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let [one, two] = parse_input(input)?;
    let mut memo = HashMap::new();
    let (a, b) = quantum_wins((one, 0, two, 0), &mut memo);
    tracing::debug!(states = memo.len(), a, b);
    Ok(a.max(b).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4,8")]
    #[case("Player 1 starting position: 4\nPlayer 2 starting position: 8")]
    fn test_part1(#[case] input: &str) -> Result<()> {
        assert_eq!("739785", part1(input)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("444356092776315", part2("4,8")?);
        Ok(())
    }

    #[test]
    fn test_advance_wraps() {
        assert_eq!(10, advance(7, 3));
        assert_eq!(1, advance(10, 1));
        assert_eq!(4, advance(4, 10));
    }
}
