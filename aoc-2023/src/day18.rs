use glam::I64Vec2;
use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    character::complete::{char, line_ending, space1, u32},
    combinator::{all_consuming, map, map_res, value},
    multi::separated_list1,
    sequence::{delimited, preceded, tuple},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dig {
    direction: I64Vec2,
    length: i64,
}

/// One line of the plan, read both ways: as written, and decoded from the
/// colour code where the first five hex digits are the length and the last
/// one the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    plain: Dig,
    colour: Dig,
}

fn direction(input: &str) -> IResult<&str, I64Vec2> {
    alt((
        value(I64Vec2::X, char('R')),
        value(I64Vec2::Y, char('D')),
        value(I64Vec2::NEG_X, char('L')),
        value(I64Vec2::NEG_Y, char('U')),
    ))(input)
}

fn colour(input: &str) -> IResult<&str, Dig> {
    map_res(
        delimited(
            tag("(#"),
            take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
            char(')'),
        ),
        |hex: &str| -> Result<Dig> {
            let code = i64::from_str_radix(hex, 16).map_err(|e| miette!("{e}"))?;
            let direction = match code & 0xf {
                0 => I64Vec2::X,
                1 => I64Vec2::Y,
                2 => I64Vec2::NEG_X,
                3 => I64Vec2::NEG_Y,
                d => return Err(miette!("Unknown direction digit {d}")),
            };
            Ok(Dig { direction, length: code >> 4 })
        },
    )(input)
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    map(
        tuple((direction, preceded(space1, u32), preceded(space1, colour))),
        |(direction, length, colour)| Instruction {
            plain: Dig { direction, length: i64::from(length) },
            colour,
        },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Instruction>> {
    let (_, plan) = all_consuming(separated_list1(line_ending, instruction))(input.trim_end())
        .map_err(|e| miette!("Failed to parse dig plan: {e}"))?;
    Ok(plan)
}

/// Cubic metres held by the lagoon: the shoelace area of the trench's
/// centre line grown by half the one-metre-wide trench, which Pick's
/// theorem gives as area + perimeter / 2 + 1.
fn lagoon(plan: impl IntoIterator<Item = Dig>) -> i64 {
    let mut corner = I64Vec2::ZERO;
    let (mut twice_area, mut perimeter) = (0, 0);
    for Dig { direction, length } in plan {
        let next = corner + direction * length;
        twice_area += corner.x * next.y - next.x * corner.y;
        perimeter += length;
        corner = next;
    }
    twice_area.abs() / 2 + perimeter / 2 + 1
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let plan = parse_input(input)?;
    Ok(lagoon(plan.iter().map(|i| i.plain)).to_string())
}

/// Lagoon dug from the instructions hidden in the colour codes.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let plan = parse_input(input)?;
    Ok(lagoon(plan.iter().map(|i| i.colour)).to_string())
}
