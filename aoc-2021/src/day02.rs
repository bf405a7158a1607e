use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{i64, line_ending, space1},
    combinator::{all_consuming, value},
    multi::separated_list1,
    sequence::separated_pair,
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Forward,
    Down,
    Up,
}

type Command = (Direction, i64);

fn command(input: &str) -> IResult<&str, Command> {
    separated_pair(
        alt((
            value(Direction::Forward, tag("forward")),
            value(Direction::Down, tag("down")),
            value(Direction::Up, tag("up")),
        )),
        space1,
        i64,
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Command>> {
    let (_, commands) = all_consuming(separated_list1(line_ending, command))(input.trim_end())
        .map_err(|e| miette!("Failed to parse commands: {e}"))?;
    Ok(commands)
}

/// Horizontal position times depth, with up/down moving the sub directly.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (horizontal, depth) =
        parse_input(input)?
            .into_iter()
            .fold((0, 0), |(h, d), (direction, x)| match direction {
                Direction::Forward => (h + x, d),
                Direction::Down => (h, d + x),
                Direction::Up => (h, d - x),
            });
    Ok((horizontal * depth).to_string())
}

/// Same product, with up/down adjusting aim and forward diving along it.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (horizontal, depth, _) = parse_input(input)?.into_iter().fold(
        (0, 0, 0),
        |(h, d, aim), (direction, x)| match direction {
            Direction::Forward => (h + x, d + aim * x, aim),
            Direction::Down => (h, d, aim + x),
            Direction::Up => (h, d, aim - x),
        },
    );
    Ok((horizontal * depth).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("150", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("900", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_unknown_direction() {
        assert!(parse_input("backward 3").is_err());
    }
}
