use std::collections::HashSet;

use miette::{miette, Diagnostic, Result, SourceSpan};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Acc,
    Jmp,
    Nop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Instruction {
    op: Op,
    arg: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Ran past the last instruction.
    Terminated(i64),
    /// About to execute an instruction a second time.
    Looped(i64),
}

#[derive(Debug, Error, Diagnostic)]
#[error("Invalid instruction on line {line}")]
#[diagnostic(
    code(day08::parse_error),
    help("Expected `acc`, `jmp` or `nop` followed by a signed offset")
)]
struct InstructionError {
    line: usize,
    #[source_code]
    src: String,
    #[label("here")]
    span: SourceSpan,
}

fn parse_line(line: &str) -> Option<Instruction> {
    let (op, arg) = line.split_once(' ')?;
    let op = match op {
        "acc" => Op::Acc,
        "jmp" => Op::Jmp,
        "nop" => Op::Nop,
        _ => return None,
    };
    let arg = arg.parse::<i64>().ok()?;
    Some(Instruction { op, arg })
}

fn parse_input(input: &str) -> Result<Vec<Instruction>, InstructionError> {
    input
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).ok_or_else(|| InstructionError {
                line: i + 1,
                src: line.to_string(),
                span: (0, line.len()).into(),
            })
        })
        .collect()
}

fn run(program: &[Instruction]) -> Outcome {
    let mut executed = HashSet::new();
    let mut accumulator = 0;
    let mut pc: i64 = 0;

    while let Some(instruction) = usize::try_from(pc).ok().and_then(|i| program.get(i)) {
        if !executed.insert(pc) {
            return Outcome::Looped(accumulator);
        }
        match instruction.op {
            Op::Acc => {
                accumulator += instruction.arg;
                pc += 1;
            }
            Op::Jmp => pc += instruction.arg,
            Op::Nop => pc += 1,
        }
    }
    Outcome::Terminated(accumulator)
}

/// Accumulator value right before any instruction runs twice.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let program = parse_input(input)?;
    match run(&program) {
        Outcome::Looped(acc) => Ok(acc.to_string()),
        Outcome::Terminated(acc) => Err(miette!("Program terminated with {acc} instead of looping")),
    }
}

/// Swaps one jmp/nop at a time until the program terminates.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let mut program = parse_input(input)?;
    for i in 0..program.len() {
        let original = program[i].op;
        program[i].op = match original {
            Op::Jmp => Op::Nop,
            Op::Nop => Op::Jmp,
            Op::Acc => continue,
        };
        if let Outcome::Terminated(acc) = run(&program) {
            tracing::debug!(patched = i, "program terminates");
            return Ok(acc.to_string());
        }
        program[i].op = original;
    }
    Err(miette!("No single jmp/nop swap makes the program terminate"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
nop +0
acc +1
jmp +4
acc +3
jmp -3
acc -99
acc +1
jmp -4
acc +6";

    #[test_log::test]
    fn test_part1() -> Result<()> {
        assert_eq!("5", part1(EXAMPLE)?);
        Ok(())
    }

    #[test_log::test]
    fn test_part2() -> Result<()> {
        assert_eq!("8", part2(EXAMPLE)?);
        Ok(())
    }

    #[test]
    fn test_invalid_op() {
        let err = parse_input("nop +0\nmul +3").unwrap_err();
        assert_eq!(2, err.line);
        assert!(parse_input("jmp x").is_err());
    }
}
