mod cube;

use glam::IVec2;
use miette::{miette, Result};
use nom::{
    branch::alt,
    character::complete::{char, u32},
    combinator::{all_consuming, map, value},
    multi::many1,
    IResult,
};

use cube::Cube;

/// Right, down, left, up: the facing values in the password.
const DIRECTIONS: [IVec2; 4] = [IVec2::X, IVec2::Y, IVec2::NEG_X, IVec2::NEG_Y];
const WALL: u8 = b'#';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Forward(u32),
    Left,
    Right,
}

fn path(input: &str) -> IResult<&str, Vec<Instruction>> {
    many1(alt((
        map(u32, Instruction::Forward),
        value(Instruction::Left, char('L')),
        value(Instruction::Right, char('R')),
    )))(input)
}

/// The monkeys' map, with space outside the board.
#[derive(Debug)]
pub struct Board {
    rows: Vec<Vec<u8>>,
}

impl Board {
    /// `.` for open tiles, `#` for walls, `None` off the board.
    pub fn tile(&self, p: IVec2) -> Option<u8> {
        let row = self.rows.get(usize::try_from(p.y).ok()?)?;
        row.get(usize::try_from(p.x).ok()?)
            .copied()
            .filter(|&t| t != b' ')
    }

    pub fn tile_count(&self) -> usize {
        self.rows.iter().flatten().filter(|&&t| t != b' ').count()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Flat wrapping: reappear on the far side of the same row or column.
    fn wrap_flat(&self, pos: IVec2, facing: usize) -> (IVec2, usize) {
        let step = DIRECTIONS[facing];
        let mut back = pos;
        while self.tile(back - step).is_some() {
            back -= step;
        }
        (back, facing)
    }
}

fn parse_input(input: &str) -> Result<(Board, Vec<Instruction>)> {
    let (map, route) = input
        .trim_end()
        .split_once("\n\n")
        .ok_or_else(|| miette!("Missing blank line between map and path"))?;
    let rows = map
        .lines()
        .map(|line| {
            line.bytes()
                .map(|c| match c {
                    b' ' | b'.' | WALL => Ok(c),
                    _ => Err(miette!("Unexpected tile {:?}", c as char)),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let (_, instructions) = all_consuming(path)(route.trim())
        .map_err(|e| miette!("Failed to parse path: {e}"))?;
    Ok((Board { rows }, instructions))
}

/// Follows the path and returns the final password.
fn walk(
    board: &Board,
    instructions: &[Instruction],
    wrap: impl Fn(IVec2, usize) -> Result<(IVec2, usize)>,
) -> Result<i32> {
    let start = (0..board.width() as i32)
        .map(|x| IVec2::new(x, 0))
        .find(|p| board.tile(*p) == Some(b'.'))
        .ok_or_else(|| miette!("No open tile on the top row"))?;
    let (mut pos, mut facing) = (start, 0);
    for instruction in instructions {
        match instruction {
            Instruction::Left => facing = (facing + 3) % 4,
            Instruction::Right => facing = (facing + 1) % 4,
            Instruction::Forward(steps) => {
                for _ in 0..*steps {
                    let ahead = pos + DIRECTIONS[facing];
                    let (next, turned) = match board.tile(ahead) {
                        Some(_) => (ahead, facing),
                        None => wrap(pos, facing)?,
                    };
                    if board.tile(next) == Some(WALL) {
                        break;
                    }
                    (pos, facing) = (next, turned);
                }
            }
        }
    }
    tracing::debug!(%pos, facing, "path ends");
    Ok(1000 * (pos.y + 1) + 4 * (pos.x + 1) + facing as i32)
}

/// Password when the map wraps around like a torus.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (board, instructions) = parse_input(input)?;
    let password = walk(&board, &instructions, |pos, facing| Ok(board.wrap_flat(pos, facing)))?;
    Ok(password.to_string())
}

/// Password when the map is folded into a cube.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (board, instructions) = parse_input(input)?;
    let cube = Cube::fold(&board)?;
    let password = walk(&board, &instructions, |pos, facing| cube.wrap(pos, facing))?;
    Ok(password.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "        ...#
        .#..
        #...
        ....
...#.......#
........#...
..#....#....
..........#.
        ...#....
        .....#..
        .#......
        ......#.

10R5L5R10L4R5L5";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("6032", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("5031", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_cube_wrap_example() -> Result<()> {
        let (board, _) = parse_input(INPUT)?;
        let cube = Cube::fold(&board)?;
        // Leaving face 4 to the right lands on face 6 heading down.
        assert_eq!((IVec2::new(14, 8), 1), cube.wrap(IVec2::new(11, 5), 0)?);
        // Leaving face 5 downwards lands on face 2 heading up.
        assert_eq!((IVec2::new(1, 7), 3), cube.wrap(IVec2::new(10, 11), 1)?);
        Ok(())
    }

    #[test]
    fn test_flat_wrap() -> Result<()> {
        let (board, _) = parse_input(INPUT)?;
        assert_eq!((IVec2::new(8, 0), 0), board.wrap_flat(IVec2::new(11, 0), 0));
        assert_eq!((IVec2::new(5, 4), 1), board.wrap_flat(IVec2::new(5, 7), 1));
        Ok(())
    }

    #[test]
    fn test_path() -> Result<()> {
        let (_, instructions) = parse_input(INPUT)?;
        assert_eq!(13, instructions.len());
        assert_eq!(Instruction::Forward(10), instructions[0]);
        assert_eq!(Instruction::Right, instructions[1]);
        Ok(())
    }
}
