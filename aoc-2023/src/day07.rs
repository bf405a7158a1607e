use itertools::Itertools;
use miette::{miette, IntoDiagnostic, Result};

const CARDS: &str = "23456789TJQKA";
const JOKER_CARDS: &str = "J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

fn type_of_hand(hand: &str) -> Result<HandType> {
    if hand.chars().count() != 5 {
        return Err(miette!("Hand needs exactly five cards, got {hand:?}"));
    }
    let counts = hand
        .chars()
        .counts()
        .into_values()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect::<Vec<_>>();
    Ok(match counts[..] {
        [5] => HandType::FiveOfAKind,
        [4, 1] => HandType::FourOfAKind,
        [3, 2] => HandType::FullHouse,
        [3, 1, 1] => HandType::ThreeOfAKind,
        [2, 2, 1] => HandType::TwoPair,
        [2, 1, 1, 1] => HandType::OnePair,
        _ => HandType::HighCard,
    })
}

/// The hand with every joker turned into the most common other card,
/// earliest card first on a tie. All jokers become the weakest card.
fn with_jokers(hand: &str) -> String {
    let counts = hand.chars().filter(|&c| c != 'J').counts();
    let best = hand
        .chars()
        .filter(|&c| c != 'J')
        .rev()
        .max_by_key(|c| counts[c])
        .unwrap_or('2');
    hand.replace('J', &best.to_string())
}

/// What hands sort by: their type, then card by card.
fn strength(hand: &str, jokers: bool) -> Result<(HandType, Vec<usize>)> {
    let (kind, order) = if jokers {
        (type_of_hand(&with_jokers(hand))?, JOKER_CARDS)
    } else {
        (type_of_hand(hand)?, CARDS)
    };
    let values = hand
        .chars()
        .map(|c| order.find(c).ok_or_else(|| miette!("Unknown card {c:?}")))
        .collect::<Result<Vec<_>>>()?;
    Ok((kind, values))
}

fn total_winnings(input: &str, jokers: bool) -> Result<String> {
    let mut hands = input
        .lines()
        .map(|line| {
            let (hand, bid) = line
                .trim()
                .split_once(' ')
                .ok_or_else(|| miette!("Malformed hand {line:?}"))?;
            Ok((strength(hand, jokers)?, bid.parse::<u64>().into_diagnostic()?))
        })
        .collect::<Result<Vec<_>>>()?;
    hands.sort_unstable();
    let total: u64 = hands
        .iter()
        .zip(1..)
        .map(|((_, bid), rank)| bid * rank)
        .sum();
    Ok(total.to_string())
}

/// Total winnings ranking hands by the usual rules.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    total_winnings(input, false)
}

/// Total winnings with J as a wildcard joker.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    total_winnings(input, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cmp::Ordering;

    fn compare_hands(a: &str, b: &str, jokers: bool) -> Result<Ordering> {
        Ok(strength(a, jokers)?.cmp(&strength(b, jokers)?))
    }

    const INPUT: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("6440", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("5905", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_wrong_hand_size() {
        assert!(type_of_hand("aaa").is_err());
        assert!(type_of_hand("aaaaaa").is_err());
    }

    #[rstest]
    #[case("aaaaa", HandType::FiveOfAKind)]
    #[case("11111", HandType::FiveOfAKind)]
    #[case("aaaba", HandType::FourOfAKind)]
    #[case("aaaab", HandType::FourOfAKind)]
    #[case("aaabb", HandType::FullHouse)]
    #[case("aabab", HandType::FullHouse)]
    #[case("aaabc", HandType::ThreeOfAKind)]
    #[case("baaca", HandType::ThreeOfAKind)]
    #[case("aabbc", HandType::TwoPair)]
    #[case("acbab", HandType::TwoPair)]
    #[case("aabcd", HandType::OnePair)]
    #[case("bcada", HandType::OnePair)]
    #[case("abcde", HandType::HighCard)]
    fn test_type_of_hand(#[case] hand: &str, #[case] expected: HandType) -> Result<()> {
        assert_eq!(expected, type_of_hand(hand)?);
        Ok(())
    }

    #[rstest]
    #[case("12AKQ", "12AKQ")]
    #[case("KKK33", "KKK33")]
    #[case("JJJJJ", "22222")]
    #[case("T55J5", "T5555")]
    #[case("KTJJT", "KTTTT")]
    #[case("QQQJA", "QQQQA")]
    #[case("123J5", "12315")]
    fn test_with_jokers(#[case] hand: &str, #[case] expected: &str) {
        assert_eq!(expected, with_jokers(hand));
    }

    #[rstest]
    #[case("AAAAA", "AAAA2", false, Ordering::Greater)]
    #[case("AAAAA", "JJJJJ", false, Ordering::Greater)]
    #[case("2AJ2A", "A2J2A", false, Ordering::Less)]
    #[case("2AJ2A", "AKQJT", false, Ordering::Greater)]
    #[case("AAAAA", "AAAA2", true, Ordering::Greater)]
    #[case("AAAAA", "JJJJJ", true, Ordering::Greater)]
    #[case("2AJ2A", "A2J2A", true, Ordering::Less)]
    #[case("2AJ2A", "AKQJT", true, Ordering::Greater)]
    #[case("KTJJT", "QQQJA", true, Ordering::Greater)]
    fn test_compare_hands(
        #[case] a: &str,
        #[case] b: &str,
        #[case] jokers: bool,
        #[case] expected: Ordering,
    ) -> Result<()> {
        assert_eq!(expected, compare_hands(a, b, jokers)?);
        Ok(())
    }
}
