use std::collections::{HashSet, VecDeque};

use miette::{miette, IntoDiagnostic, Result};

type Deck = VecDeque<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Player {
    One,
    Two,
}

fn parse_input(input: &str) -> Result<(Deck, Deck)> {
    let mut decks = input.split("\n\n").map(|block| {
        block
            .lines()
            .skip(1)
            .map(|line| line.trim().parse::<usize>().into_diagnostic())
            .collect::<Result<Deck>>()
    });
    match (decks.next(), decks.next(), decks.next()) {
        (Some(one), Some(two), None) => Ok((one?, two?)),
        _ => Err(miette!("Expected exactly two decks")),
    }
}

fn score(deck: &Deck) -> usize {
    deck.iter()
        .rev()
        .enumerate()
        .map(|(i, card)| (i + 1) * card)
        .sum()
}

fn combat(mut one: Deck, mut two: Deck) -> Deck {
    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        one.pop_front();
        two.pop_front();
        if a > b {
            one.extend([a, b]);
        } else {
            two.extend([b, a]);
        }
    }
    if one.is_empty() {
        two
    } else {
        one
    }
}

/// Plays a game of Recursive Combat. A repeated deck configuration within the
/// same game hands the win to player one.
fn recursive_combat(mut one: Deck, mut two: Deck) -> (Player, Deck) {
    let mut seen = HashSet::new();
    while let (Some(&a), Some(&b)) = (one.front(), two.front()) {
        if !seen.insert((one.clone(), two.clone())) {
            return (Player::One, one);
        }
        one.pop_front();
        two.pop_front();
        let winner = if a <= one.len() && b <= two.len() {
            let sub_one = one.iter().take(a).copied().collect();
            let sub_two = two.iter().take(b).copied().collect();
            recursive_combat(sub_one, sub_two).0
        } else if a > b {
            Player::One
        } else {
            Player::Two
        };
        match winner {
            Player::One => one.extend([a, b]),
            Player::Two => two.extend([b, a]),
        }
    }
    if one.is_empty() {
        (Player::Two, two)
    } else {
        (Player::One, one)
    }
}

/// Winning player's score in regular Combat.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (one, two) = parse_input(input)?;
    Ok(score(&combat(one, two)).to_string())
}

/// Winning player's score in Recursive Combat.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (one, two) = parse_input(input)?;
    let (winner, deck) = recursive_combat(one, two);
    tracing::debug!(?winner);
    Ok(score(&deck).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
Player 1:
9
2
6
3
1

Player 2:
5
8
4
7
10";

    #[test_log::test]
    fn test_part1() -> Result<()> {
        assert_eq!("306", part1(INPUT)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("291", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_repeated_configuration_ends_game() -> Result<()> {
        let (one, two) = parse_input("Player 1:\n43\n19\n\nPlayer 2:\n2\n29\n14")?;
        let (winner, _) = recursive_combat(one, two);
        assert_eq!(Player::One, winner);
        Ok(())
    }
}
