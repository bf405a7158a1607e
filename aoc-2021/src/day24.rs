use std::collections::HashSet;

use miette::{miette, Diagnostic, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{i64, line_ending, one_of, space1},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, separated_pair},
    IResult,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic, PartialEq, Eq)]
enum AluError {
    #[error("division by zero")]
    #[diagnostic(code(alu::divide_by_zero))]
    DivideByZero,
    #[error("modulo with a negative dividend or non-positive divisor")]
    #[diagnostic(code(alu::invalid_modulo))]
    InvalidModulo,
    #[error("program read more input than was supplied")]
    #[diagnostic(code(alu::input_exhausted))]
    InputExhausted,
    #[error("register overflowed 64 bits")]
    #[diagnostic(code(alu::overflow))]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operand {
    Register(usize),
    Number(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    Inp(usize),
    Add(usize, Operand),
    Mul(usize, Operand),
    Div(usize, Operand),
    Mod(usize, Operand),
    Eql(usize, Operand),
}

type Registers = [i64; 4];
const Z: usize = 3;

fn register(input: &str) -> IResult<&str, usize> {
    map(one_of("wxyz"), |c| (c as u8 - b'w') as usize)(input)
}

fn operand(input: &str) -> IResult<&str, Operand> {
    alt((map(register, Operand::Register), map(i64, Operand::Number)))(input)
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    let binary = |name: &'static str, build: fn(usize, Operand) -> Instruction| {
        map(
            preceded(tag(name), preceded(space1, separated_pair(register, space1, operand))),
            move |(a, b)| build(a, b),
        )
    };
    alt((
        map(preceded(tag("inp"), preceded(space1, register)), Instruction::Inp),
        binary("add", Instruction::Add),
        binary("mul", Instruction::Mul),
        binary("div", Instruction::Div),
        binary("mod", Instruction::Mod),
        binary("eql", Instruction::Eql),
    ))(input)
}

fn parse_input(input: &str) -> Result<Vec<Instruction>> {
    let (_, program) = all_consuming(separated_list1(line_ending, instruction))(input.trim_end())
        .map_err(|e| miette!("Failed to parse ALU program: {e}"))?;
    Ok(program)
}

fn run(program: &[Instruction], inputs: &[i64], mut registers: Registers) -> Result<Registers, AluError> {
    let mut inputs = inputs.iter();
    for &instruction in program {
        let value = |b: Operand, r: &Registers| match b {
            Operand::Register(i) => r[i],
            Operand::Number(n) => n,
        };
        match instruction {
            Instruction::Inp(a) => {
                registers[a] = *inputs.next().ok_or(AluError::InputExhausted)?;
            }
            Instruction::Add(a, b) => {
                let v = value(b, &registers);
                registers[a] = registers[a].checked_add(v).ok_or(AluError::Overflow)?;
            }
            Instruction::Mul(a, b) => {
                let v = value(b, &registers);
                registers[a] = registers[a].checked_mul(v).ok_or(AluError::Overflow)?;
            }
            Instruction::Div(a, b) => {
                let divisor = value(b, &registers);
                if divisor == 0 {
                    return Err(AluError::DivideByZero);
                }
                registers[a] = registers[a].checked_div(divisor).ok_or(AluError::Overflow)?;
            }
            Instruction::Mod(a, b) => {
                let divisor = value(b, &registers);
                if registers[a] < 0 || divisor <= 0 {
                    return Err(AluError::InvalidModulo);
                }
                registers[a] %= divisor;
            }
            Instruction::Eql(a, b) => {
                let v = value(b, &registers);
                registers[a] = i64::from(registers[a] == v);
            }
        }
    }
    Ok(registers)
}

/// One block per `inp`. Only z survives from block to block, which is how
/// MONAD is written.
fn chunks(program: &[Instruction]) -> Vec<&[Instruction]> {
    let starts = program
        .iter()
        .enumerate()
        .filter(|(_, i)| matches!(i, Instruction::Inp(_)))
        .map(|(at, _)| at)
        .chain([program.len()])
        .collect::<Vec<_>>();
    starts.windows(2).map(|w| &program[w[0]..w[1]]).collect()
}

/// When every block divides z by exactly 1 or 26, z is a base-26 stack and
/// must stay below 26 to the number of pops still to come.
fn z_limits(blocks: &[&[Instruction]]) -> Option<Vec<i64>> {
    let pops = blocks
        .iter()
        .map(|block| {
            let divs = block
                .iter()
                .filter_map(|i| match i {
                    Instruction::Div(Z, Operand::Number(n)) => Some(*n),
                    _ => None,
                })
                .collect::<Vec<_>>();
            match divs[..] {
                [1] => Some(0u32),
                [26] => Some(1),
                _ => None,
            }
        })
        .collect::<Option<Vec<_>>>()?;
    Some(
        (0..pops.len())
            .map(|i| {
                let remaining = pops[i..].iter().sum::<u32>();
                26i64.checked_pow(remaining).unwrap_or(i64::MAX)
            })
            .collect(),
    )
}

struct Search<'a> {
    blocks: Vec<&'a [Instruction]>,
    limits: Option<Vec<i64>>,
    digits: Vec<i64>,
    dead_ends: HashSet<(usize, i64)>,
}

impl Search<'_> {
    /// Digits for blocks `index..` that bring z to 0, trying `digits` in order.
    fn digits_from(&mut self, index: usize, z: i64) -> Result<Option<Vec<i64>>, AluError> {
        if index == self.blocks.len() {
            return Ok((z == 0).then(Vec::new));
        }
        if self.limits.as_ref().is_some_and(|l| z >= l[index]) || self.dead_ends.contains(&(index, z)) {
            return Ok(None);
        }
        for d in self.digits.clone() {
            let registers = run(self.blocks[index], &[d], [0, 0, 0, z])?;
            if let Some(mut rest) = self.digits_from(index + 1, registers[Z])? {
                rest.insert(0, d);
                return Ok(Some(rest));
            }
        }
        self.dead_ends.insert((index, z));
        Ok(None)
    }
}

fn model_number(input: &str, digits: impl IntoIterator<Item = i64>) -> Result<String> {
    let program = parse_input(input)?;
    let blocks = chunks(&program);
    let limits = z_limits(&blocks);
    tracing::debug!(blocks = blocks.len(), bounded = limits.is_some());
    let mut search = Search {
        blocks,
        limits,
        digits: digits.into_iter().collect(),
        dead_ends: HashSet::new(),
    };
    let found = search
        .digits_from(0, 0)?
        .ok_or_else(|| miette!("No model number is accepted"))?;
    Ok(found.iter().map(|d| d.to_string()).collect())
}

/// Largest model number MONAD accepts.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    model_number(input, (1..=9).rev())
}

/// Smallest model number MONAD accepts.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    model_number(input, 1..=9)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn monad_block(div: i64, check: i64, offset: i64) -> String {
        format!(
            "inp w\nmul x 0\nadd x z\nmod x 26\ndiv z {div}\nadd x {check}\neql x w\neql x 0\n\
             mul y 0\nadd y 25\nmul y x\nadd y 1\nmul z y\nmul y 0\nadd y w\nadd y {offset}\n\
             mul y x\nadd z y"
        )
    }

    #[test]
    fn test_negate() -> Result<()> {
        let program = parse_input("inp x\nmul x -1")?;
        assert_eq!(-7, run(&program, &[7], [0; 4])?[1]);
        Ok(())
    }

    #[rstest]
    #[case(&[3, 9], 1)]
    #[case(&[3, 8], 0)]
    fn test_three_times(#[case] inputs: &[i64], #[case] z: i64) -> Result<()> {
        let program = parse_input("inp z\ninp x\nmul z 3\neql z x")?;
        assert_eq!(z, run(&program, inputs, [0; 4])?[Z]);
        Ok(())
    }

    #[test]
    fn test_binary() -> Result<()> {
        let program = parse_input(
            "inp w\nadd z w\nmod z 2\ndiv w 2\nadd y w\nmod y 2\ndiv w 2\nadd x w\nmod x 2\ndiv w 2\nmod w 2",
        )?;
        assert_eq!([1, 1, 0, 1], run(&program, &[13], [0; 4])?);
        Ok(())
    }

    #[test]
    fn test_errors() -> Result<()> {
        let program = parse_input("inp x\ndiv x 0")?;
        assert_eq!(Err(AluError::DivideByZero), run(&program, &[1], [0; 4]));
        let program = parse_input("inp x\nmod x -2")?;
        assert_eq!(Err(AluError::InvalidModulo), run(&program, &[1], [0; 4]));
        assert_eq!(Err(AluError::InputExhausted), run(&program, &[], [0; 4]));
        assert!(parse_input("sub x 1").is_err());
        let program = parse_input("inp x\nmul x 4611686018427387904\nmul x 4")?;
        assert_eq!(Err(AluError::Overflow), run(&program, &[1], [0; 4]));
        let program = parse_input("inp x\nadd x 9223372036854775807")?;
        assert_eq!(Err(AluError::Overflow), run(&program, &[1], [0; 4]));
        Ok(())
    }

    #[test]
    fn test_unstructured_search() -> Result<()> {
        let input = "inp w\nadd z w\ninp w\nadd z w\nadd z -10";
        assert_eq!("91", part1(input)?);
        assert_eq!("19", part2(input)?);
        Ok(())
    }

    #[test_log::test]
    fn test_monad_search() -> Result<()> {
        let input = [monad_block(1, 12, 4), monad_block(26, -6, 11)].join("\n");
        let blocks = parse_input(&input)?;
        assert_eq!(Some(vec![26, 26]), z_limits(&chunks(&blocks)));
        assert_eq!("97", part1(&input)?);
        assert_eq!("31", part2(&input)?);
        Ok(())
    }
}
