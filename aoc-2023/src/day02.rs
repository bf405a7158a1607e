use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{line_ending, space1, u32},
    combinator::{all_consuming, map, value},
    multi::separated_list1,
    sequence::{delimited, separated_pair},
    IResult,
};

/// Red, green and blue cube counts.
type Cubes = [u32; 3];

const BAG: Cubes = [12, 13, 14];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    id: u32,
    draws: Vec<Cubes>,
}

fn draw(input: &str) -> IResult<&str, Cubes> {
    map(
        separated_list1(
            tag(", "),
            separated_pair(
                u32,
                space1,
                alt((
                    value(0, tag("red")),
                    value(1, tag("green")),
                    value(2, tag("blue")),
                )),
            ),
        ),
        |counts| {
            counts.into_iter().fold([0; 3], |mut cubes, (n, colour): (u32, usize)| {
                cubes[colour] += n;
                cubes
            })
        },
    )(input)
}

fn game(input: &str) -> IResult<&str, Game> {
    map(
        separated_pair(
            delimited(tag("Game "), u32, tag(":")),
            space1,
            separated_list1(tag("; "), draw),
        ),
        |(id, draws)| Game { id, draws },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Game>> {
    let (_, games) = all_consuming(separated_list1(line_ending, game))(input.trim_end())
        .map_err(|e| miette!("Failed to parse games: {e}"))?;
    Ok(games)
}

/// Fewest cubes of each colour that make every draw of a game possible.
fn minimum_set(game: &Game) -> Cubes {
    game.draws.iter().fold([0; 3], |most, draw| {
        [0, 1, 2].map(|c| most[c].max(draw[c]))
    })
}

/// Sum of ids of games possible with 12 red, 13 green and 14 blue cubes.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let sum: u32 = parse_input(input)?
        .iter()
        .filter(|game| minimum_set(game).iter().zip(BAG).all(|(&need, have)| need <= have))
        .map(|game| game.id)
        .sum();
    Ok(sum.to_string())
}

/// Sum of the powers of each game's minimum set.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let sum: u32 = parse_input(input)?
        .iter()
        .map(|game| minimum_set(game).iter().product::<u32>())
        .sum();
    Ok(sum.to_string())
}
