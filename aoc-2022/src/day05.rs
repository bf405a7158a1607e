use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{line_ending, u32},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, tuple},
    IResult,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    count: usize,
    from: usize,
    to: usize,
}

fn step(input: &str) -> IResult<&str, Move> {
    map(
        tuple((
            preceded(tag("move "), u32),
            preceded(tag(" from "), u32),
            preceded(tag(" to "), u32),
        )),
        |(count, from, to)| Move {
            count: count as usize,
            from: from as usize,
            to: to as usize,
        },
    )(input)
}

/// Reads the drawing bottom-up; crate letters sit in every fourth column.
fn parse_stacks(drawing: &str) -> Result<Vec<Vec<char>>> {
    let mut rows = drawing.lines().rev();
    let labels = rows.next().ok_or_else(|| miette!("Missing stack labels"))?;
    let count = labels.split_whitespace().count();
    let mut stacks = vec![Vec::new(); count];
    for row in rows {
        for (i, c) in row.chars().skip(1).step_by(4).enumerate() {
            if c.is_ascii_alphabetic() {
                stacks
                    .get_mut(i)
                    .ok_or_else(|| miette!("Crate outside of the {count} stacks"))?
                    .push(c);
            }
        }
    }
    Ok(stacks)
}

fn parse_input(input: &str) -> Result<(Vec<Vec<char>>, Vec<Move>)> {
    let (drawing, procedure) = input
        .split_once("\n\n")
        .ok_or_else(|| miette!("Missing blank line after the drawing"))?;
    let stacks = parse_stacks(drawing)?;
    let (_, moves) = all_consuming(separated_list1(line_ending, step))(procedure.trim())
        .map_err(|e| miette!("Failed to parse procedure: {e}"))?;
    for m in &moves {
        if !(1..=stacks.len()).contains(&m.from) || !(1..=stacks.len()).contains(&m.to) {
            return Err(miette!("Move {m:?} refers to a missing stack"));
        }
    }
    Ok((stacks, moves))
}

fn rearrange(input: &str, one_at_a_time: bool) -> Result<String> {
    let (mut stacks, moves) = parse_input(input)?;
    for Move { count, from, to } in moves {
        let source = &mut stacks[from - 1];
        let at = source
            .len()
            .checked_sub(count)
            .ok_or_else(|| miette!("Stack {from} holds fewer than {count} crates"))?;
        let mut lifted = source.split_off(at);
        if one_at_a_time {
            lifted.reverse();
        }
        stacks[to - 1].extend(lifted);
    }
    Ok(stacks.iter().filter_map(|s| s.last()).collect())
}

/// Top crates after a CrateMover 9000 moves crates one at a time.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    rearrange(input, true)
}

/// Top crates after a CrateMover 9001 moves whole piles at once.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    rearrange(input, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "    [D]    
[N] [C]    
[Z] [M] [P]
 1   2   3 

move 1 from 2 to 1
move 3 from 1 to 3
move 2 from 2 to 1
move 1 from 1 to 2";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("CMZ", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("MCD", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_parse_stacks() -> Result<()> {
        let (stacks, moves) = parse_input(INPUT)?;
        assert_eq!(vec![vec!['Z', 'N'], vec!['M', 'C', 'D'], vec!['P']], stacks);
        assert_eq!(Move { count: 3, from: 1, to: 3 }, moves[1]);
        Ok(())
    }
}
