use std::collections::HashSet;

use glam::IVec3;
use miette::{miette, Result};
use nom::{
    character::complete::{char, i32, line_ending},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{terminated, tuple},
    IResult,
};

const FACES: [IVec3; 6] = [
    IVec3::X,
    IVec3::NEG_X,
    IVec3::Y,
    IVec3::NEG_Y,
    IVec3::Z,
    IVec3::NEG_Z,
];

fn cube(input: &str) -> IResult<&str, IVec3> {
    map(
        tuple((terminated(i32, char(',')), terminated(i32, char(',')), i32)),
        |(x, y, z)| IVec3::new(x, y, z),
    )(input)
}

fn parse_input(input: &str) -> Result<HashSet<IVec3>> {
    let (_, cubes) = all_consuming(separated_list1(line_ending, cube))(input.trim_end())
        .map_err(|e| miette!("Failed to parse cubes: {e}"))?;
    Ok(cubes.into_iter().collect())
}

fn neighbours(c: IVec3) -> impl Iterator<Item = IVec3> {
    FACES.into_iter().map(move |f| c + f)
}

/// Faces of every cube not touching another cube.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let cubes = parse_input(input)?;
    let area = cubes
        .iter()
        .flat_map(|&c| neighbours(c))
        .filter(|n| !cubes.contains(n))
        .count();
    Ok(area.to_string())
}

/// Faces reachable by steam from outside the droplet.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let cubes = parse_input(input)?;
    let min = cubes.iter().fold(IVec3::MAX, |m, &c| m.min(c)) - IVec3::ONE;
    let max = cubes.iter().fold(IVec3::MIN, |m, &c| m.max(c)) + IVec3::ONE;
    let mut steam = HashSet::from([min]);
    let mut frontier = vec![min];
    let mut area = 0;
    while let Some(air) = frontier.pop() {
        for n in neighbours(air) {
            if n.cmplt(min).any() || n.cmpgt(max).any() {
                continue;
            }
            if cubes.contains(&n) {
                area += 1;
            } else if steam.insert(n) {
                frontier.push(n);
            }
        }
    }
    tracing::debug!(steam = steam.len());
    Ok(area.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "\
2,2,2
1,2,2
3,2,2
2,1,2
2,3,2
2,2,1
2,2,3
2,2,4
2,2,6
1,2,5
3,2,5
2,1,5
2,3,5";

    #[rstest]
    #[case("1,1,1\n2,1,1", "10")]
    #[case(INPUT, "64")]
    fn test_part1(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part1(input)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("58", part2(INPUT)?);
        Ok(())
    }
}
