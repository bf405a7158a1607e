use glam::IVec2;
use miette::{miette, IntoDiagnostic, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    North,
    South,
    East,
    West,
    Left,
    Right,
    Forward,
}

fn parse_input(input: &str) -> Result<Vec<(Action, i32)>> {
    input
        .lines()
        .map(|line| {
            let line = line.trim();
            let action = match line.chars().next() {
                Some('N') => Action::North,
                Some('S') => Action::South,
                Some('E') => Action::East,
                Some('W') => Action::West,
                Some('L') => Action::Left,
                Some('R') => Action::Right,
                Some('F') => Action::Forward,
                _ => return Err(miette!("unknown op: {line}")),
            };
            let value = line[1..].parse::<i32>().into_diagnostic()?;
            Ok((action, value))
        })
        .collect()
}

/// Quarter turns clockwise for an R/L rotation of `degrees`.
fn quarter_turns(action: Action, degrees: i32) -> Result<i32> {
    if degrees % 90 != 0 {
        return Err(miette!("Rotation of {degrees} degrees is not a multiple of 90"));
    }
    let turns = degrees / 90;
    let clockwise = if action == Action::Left { -turns } else { turns };
    Ok(clockwise.rem_euclid(4))
}

/// Rotates clockwise by `turns` quarter turns (x east, y north).
fn rotate(v: IVec2, turns: i32) -> IVec2 {
    (0..turns).fold(v, |v, _| IVec2::new(v.y, -v.x))
}

fn compass(action: Action) -> Option<IVec2> {
    match action {
        Action::North => Some(IVec2::Y),
        Action::South => Some(IVec2::NEG_Y),
        Action::East => Some(IVec2::X),
        Action::West => Some(IVec2::NEG_X),
        _ => None,
    }
}

/// The ship itself moves with N/S/E/W and turns its heading.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let mut ship = IVec2::ZERO;
    let mut heading = IVec2::X;
    for (action, value) in parse_input(input)? {
        match action {
            Action::Left | Action::Right => heading = rotate(heading, quarter_turns(action, value)?),
            Action::Forward => ship += heading * value,
            direction => ship += compass(direction).unwrap_or_default() * value,
        }
    }
    tracing::debug!(?ship);
    Ok((ship.x.abs() + ship.y.abs()).to_string())
}

/// N/S/E/W and turns move a waypoint relative to the ship instead.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut ship = IVec2::ZERO;
    let mut waypoint = IVec2::new(10, 1);
    for (action, value) in parse_input(input)? {
        match action {
            Action::Left | Action::Right => {
                waypoint = rotate(waypoint, quarter_turns(action, value)?)
            }
            Action::Forward => ship += waypoint * value,
            direction => waypoint += compass(direction).unwrap_or_default() * value,
        }
    }
    tracing::debug!(?ship);
    Ok((ship.x.abs() + ship.y.abs()).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "F10\nN3\nF7\nR90\nF11";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("25", part1(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("286", part2(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_rotate() -> Result<()> {
        let waypoint = IVec2::new(10, 4);
        assert_eq!(IVec2::new(4, -10), rotate(waypoint, quarter_turns(Action::Right, 90)?));
        assert_eq!(IVec2::new(-4, 10), rotate(waypoint, quarter_turns(Action::Left, 90)?));
        assert_eq!(IVec2::new(-10, -4), rotate(waypoint, quarter_turns(Action::Left, 180)?));
        assert!(quarter_turns(Action::Left, 45).is_err());
        Ok(())
    }
}
