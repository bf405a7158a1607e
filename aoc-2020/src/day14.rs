use std::collections::HashMap;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::{is_a, tag},
    character::complete::{char, line_ending, u64},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair},
    IResult,
};

const WORD_BITS: u32 = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Mask {
    /// Bits forced to 1.
    ones: u64,
    /// Bits forced to 0.
    zeros: u64,
    /// Floating (`X`) bits.
    floating: u64,
}

impl Mask {
    fn from_str(mask: &str) -> Self {
        mask.bytes().fold(
            Mask { ones: 0, zeros: 0, floating: 0 },
            |m, b| Mask {
                ones: m.ones << 1 | (b == b'1') as u64,
                zeros: m.zeros << 1 | (b == b'0') as u64,
                floating: m.floating << 1 | (b == b'X') as u64,
            },
        )
    }

    fn apply_to_value(&self, value: u64) -> u64 {
        (value | self.ones) & !self.zeros
    }

    /// Every address a write lands on: ones forced, floating bits take all combinations.
    fn addresses(&self, address: u64) -> Vec<u64> {
        let base = (address | self.ones) & !self.floating;
        let floating_bits = (0..WORD_BITS)
            .filter(|&bit| aoc_common::bits::mask(self.floating, bit) == 1)
            .collect::<Vec<_>>();
        (0..1u64 << floating_bits.len())
            .map(|combo| {
                floating_bits
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| aoc_common::bits::mask(combo, i as u32) == 1)
                    .fold(base, |addr, (_, &bit)| addr | 1 << bit)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Instruction {
    SetMask(Mask),
    Write { address: u64, value: u64 },
}

fn instruction(input: &str) -> IResult<&str, Instruction> {
    alt((
        map(preceded(tag("mask = "), is_a("X01")), |m| {
            Instruction::SetMask(Mask::from_str(m))
        }),
        map(
            separated_pair(delimited(tag("mem["), u64, char(']')), tag(" = "), u64),
            |(address, value)| Instruction::Write { address, value },
        ),
    ))(input)
}

fn parse_input(input: &str) -> Result<Vec<Instruction>> {
    let (_, program) = all_consuming(separated_list1(line_ending, instruction))(input)
        .map_err(|e| miette!("Failed to parse initialization program: {e}"))?;
    Ok(program)
}

fn run(input: &str, mut write: impl FnMut(&mut HashMap<u64, u64>, &Mask, u64, u64)) -> Result<String> {
    let mut memory = HashMap::new();
    let mut mask = None;
    for instruction in parse_input(input)? {
        match instruction {
            Instruction::SetMask(m) => mask = Some(m),
            Instruction::Write { address, value } => {
                let mask = mask.as_ref().ok_or_else(|| miette!("Write before any mask"))?;
                write(&mut memory, mask, address, value);
            }
        }
    }
    let sum = memory.values().try_fold(0u64, |sum, &v| sum.checked_add(v));
    sum.map(|s| s.to_string())
        .ok_or_else(|| miette!("Memory sum overflowed"))
}

/// The mask rewrites values.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    run(input, |memory, mask, address, value| {
        memory.insert(address, mask.apply_to_value(value));
    })
}

/// The mask decodes addresses; floating bits fan a write out.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    run(input, |memory, mask, address, value| {
        for address in mask.addresses(address) {
            memory.insert(address, value);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1() -> Result<()> {
        let input = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0";
        assert_eq!("165", part1(input)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        let input = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1";
        assert_eq!("208", part2(input)?);
        Ok(())
    }

    #[test]
    fn test_addresses() {
        let mask = Mask::from_str("000000000000000000000000000000X1001X");
        let mut addresses = mask.addresses(42);
        addresses.sort_unstable();
        assert_eq!(vec![26, 27, 58, 59], addresses);
    }

    #[test]
    fn test_write_before_mask() {
        assert!(part1("mem[8] = 11").is_err());
    }
}
