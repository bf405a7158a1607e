use miette::{miette, Result};

#[derive(Debug, PartialEq, Eq)]
enum Status {
    Corrupted(char),
    /// Closers needed to finish the line, innermost first.
    Incomplete(String),
    Complete,
}

fn closer(open: char) -> Option<char> {
    match open {
        '(' => Some(')'),
        '[' => Some(']'),
        '{' => Some('}'),
        '<' => Some('>'),
        _ => None,
    }
}

fn check(line: &str) -> Result<Status> {
    let mut expected = Vec::new();
    for c in line.trim().chars() {
        if let Some(close) = closer(c) {
            expected.push(close);
        } else if matches!(c, ')' | ']' | '}' | '>') {
            if expected.pop() != Some(c) {
                return Ok(Status::Corrupted(c));
            }
        } else {
            return Err(miette!("Unexpected character {c:?} in {line:?}"));
        }
    }
    if expected.is_empty() {
        Ok(Status::Complete)
    } else {
        Ok(Status::Incomplete(expected.into_iter().rev().collect()))
    }
}

fn completion_score(completion: &str) -> u64 {
    completion.chars().fold(0, |score, c| {
        let value = match c {
            ')' => 1,
            ']' => 2,
            '}' => 3,
            _ => 4,
        };
        score * 5 + value
    })
}

/// Syntax error score of the corrupted lines.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut score: u64 = 0;
    for line in input.lines() {
        if let Status::Corrupted(c) = check(line)? {
            score += match c {
                ')' => 3,
                ']' => 57,
                '}' => 1197,
                _ => 25137,
            };
        }
    }
    Ok(score.to_string())
}

/// Middle completion score of the incomplete lines.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut scores = Vec::new();
    for line in input.lines() {
        if let Status::Incomplete(completion) = check(line)? {
            scores.push(completion_score(&completion));
        }
    }
    if scores.is_empty() {
        return Err(miette!("No incomplete lines"));
    }
    scores.sort_unstable();
    Ok(scores[scores.len() / 2].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]";

    #[test]
    fn test_check() -> Result<()> {
        assert_eq!(Status::Corrupted('}'), check("{([(<{}[<>[]}>{[]{[(<()>")?);
        assert_eq!(
            Status::Incomplete("}}]])})]".to_string()),
            check("[({(<(())[]>[[{[]{<()<>>")?
        );
        assert_eq!(Status::Complete, check("[<>({}){}[([])<>]]")?);
        assert!(check("(a)").is_err());
        Ok(())
    }

    #[test]
    fn test_completion_score() {
        assert_eq!(288957, completion_score("}}]])})]"));
        assert_eq!(294, completion_score("])}>"));
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("26397", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("288957", part2(INPUT)?);
        Ok(())
    }
}
