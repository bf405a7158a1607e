use std::collections::HashMap;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{anychar, char, line_ending, space1, u32},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Rule {
    Literal(char),
    /// Alternatives, each a sequence of rule ids.
    Alternatives(Vec<Vec<u32>>),
}

struct Grammar {
    rules: HashMap<u32, Rule>,
}

impl Grammar {
    /// Every position a match of `rule` starting at `start` can end at.
    ///
    /// Returning all ends (not just the first) is what lets the looping
    /// rules 8 and 11 work: each rule consumes at least one character, so
    /// recursion is bounded by the message length.
    fn match_ends(&self, rule: u32, message: &[char], start: usize) -> Vec<usize> {
        match self.rules.get(&rule) {
            Some(Rule::Literal(c)) => {
                if message.get(start) == Some(c) {
                    vec![start + 1]
                } else {
                    vec![]
                }
            }
            Some(Rule::Alternatives(alternatives)) => {
                let mut ends = alternatives
                    .iter()
                    .flat_map(|sequence| {
                        sequence.iter().fold(vec![start], |positions, &sub| {
                            positions
                                .into_iter()
                                .filter(|&p| p < message.len())
                                .flat_map(|p| self.match_ends(sub, message, p))
                                .collect()
                        })
                    })
                    .collect::<Vec<_>>();
                ends.sort_unstable();
                ends.dedup();
                ends
            }
            None => vec![],
        }
    }

    fn matches(&self, message: &str) -> bool {
        let message = message.chars().collect::<Vec<_>>();
        self.match_ends(0, &message, 0).contains(&message.len())
    }
}

fn rule(input: &str) -> IResult<&str, (u32, Rule)> {
    separated_pair(
        u32,
        tag(": "),
        alt((
            map(delimited(char('"'), anychar, char('"')), Rule::Literal),
            map(
                separated_list1(tag(" | "), separated_list1(space1, u32)),
                Rule::Alternatives,
            ),
        )),
    )(input)
}

fn parse_input(input: &str) -> Result<(Grammar, Vec<&str>)> {
    let (rules, messages) = input
        .split_once("\n\n")
        .ok_or_else(|| miette!("Expected rules and messages separated by a blank line"))?;
    let (_, rules) = all_consuming(separated_list1(line_ending, rule))(rules)
        .map_err(|e| miette!("Failed to parse rules: {e}"))?;
    let grammar = Grammar {
        rules: rules.into_iter().collect(),
    };
    Ok((grammar, messages.lines().collect()))
}

fn count_matching(grammar: &Grammar, messages: &[&str]) -> String {
    messages
        .iter()
        .filter(|m| grammar.matches(m))
        .count()
        .to_string()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (grammar, messages) = parse_input(input)?;
    Ok(count_matching(&grammar, &messages))
}

/// Same, with `8: 42 | 42 8` and `11: 42 31 | 42 11 31`.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (mut grammar, messages) = parse_input(input)?;
    grammar
        .rules
        .insert(8, Rule::Alternatives(vec![vec![42], vec![42, 8]]));
    grammar
        .rules
        .insert(11, Rule::Alternatives(vec![vec![42, 31], vec![42, 11, 31]]));
    Ok(count_matching(&grammar, &messages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1() -> Result<()> {
        let input = "\
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: \"a\"
5: \"b\"

ababbb
bababa
abbbab
aaabbb
aaaabbb";
        assert_eq!("2", part1(input)?);
        Ok(())
    }

    #[test]
    fn test_looping_rules() -> Result<()> {
        let input = "\
0: 8 11
8: 42
11: 42 31
42: \"a\"
31: \"b\"

aab
aaab
aaabb
aabb
ab
b";
        assert_eq!("1", part1(input)?);
        assert_eq!("3", part2(input)?);
        Ok(())
    }

    const LOOPING: &str = "\
42: 9 14 | 10 1
9: 14 27 | 1 26
10: 23 14 | 28 1
1: \"a\"
11: 42 31
5: 1 14 | 15 1
19: 14 1 | 14 14
12: 24 14 | 19 1
16: 15 1 | 14 14
31: 14 17 | 1 13
6: 14 14 | 1 14
2: 1 24 | 14 4
0: 8 11
13: 14 3 | 1 12
15: 1 | 14
17: 14 2 | 1 7
23: 25 1 | 22 14
28: 16 1
4: 1 1
20: 14 14 | 1 15
3: 5 14 | 16 1
27: 1 6 | 14 18
14: \"b\"
21: 14 1 | 1 14
25: 1 1 | 1 14
22: 14 14
8: 42
26: 14 22 | 1 20
18: 15 15
7: 14 5 | 1 21
24: 14 1

abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
bbabbbbaabaabba
babbbbaabbbbbabbbbbbaabaaabaaa
aaabbbbbbaaaabaababaabababbabaaabbababababaaa
bbbbbbbaaaabbbbaaabbabaaa
bbbababbbbaaaaaaaabbababaaababaabab
ababaaaaaabaaab
ababaaaaabbbaba
baabbaaaabbaaaababbaababb
abbbbabbbbaaaababbbbbbaaaababb
aaaaabbaabaaaaababaa
aaaabbaaaabbaaa
aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
babaaabbbaaabaababbaabababaaab
aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba";

    #[test]
    fn test_looping_example() -> Result<()> {
        assert_eq!("3", part1(LOOPING)?);
        assert_eq!("12", part2(LOOPING)?);
        Ok(())
    }

    #[test]
    fn test_rule_parser() {
        assert_eq!(rule("4: \"a\""), Ok(("", (4, Rule::Literal('a')))));
        assert_eq!(
            rule("1: 2 3 | 3 2"),
            Ok(("", (1, Rule::Alternatives(vec![vec![2, 3], vec![3, 2]]))))
        );
    }
}
