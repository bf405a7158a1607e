use std::{collections::HashMap, ops::RangeInclusive};

use miette::{miette, Result};
use nom::{
    bytes::complete::{tag, take_until},
    character::complete::{char, line_ending, multispace1, u64},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{preceded, separated_pair, terminated, tuple},
    IResult,
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Field<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u64>; 2],
}

impl Field<'_> {
    fn accepts(&self, value: u64) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

type Ticket = Vec<u64>;

#[derive(Debug)]
struct Notes<'a> {
    fields: Vec<Field<'a>>,
    mine: Ticket,
    nearby: Vec<Ticket>,
}

fn range(input: &str) -> IResult<&str, RangeInclusive<u64>> {
    let (input, (low, high)) = separated_pair(u64, char('-'), u64)(input)?;
    Ok((input, low..=high))
}

fn field(input: &str) -> IResult<&str, Field> {
    let (input, name) = terminated(take_until(": "), tag(": "))(input)?;
    let (input, (first, second)) = separated_pair(range, tag(" or "), range)(input)?;
    Ok((
        input,
        Field {
            name,
            ranges: [first, second],
        },
    ))
}

fn ticket(input: &str) -> IResult<&str, Ticket> {
    separated_list1(char(','), u64)(input)
}

fn notes(input: &str) -> IResult<&str, Notes> {
    let (input, (fields, mine, nearby)) = tuple((
        separated_list1(line_ending, field),
        preceded(
            tuple((multispace1, tag("your ticket:"), line_ending)),
            ticket,
        ),
        preceded(
            tuple((multispace1, tag("nearby tickets:"), line_ending)),
            separated_list1(line_ending, ticket),
        ),
    ))(input)?;
    Ok((input, Notes { fields, mine, nearby }))
}

fn parse_input(input: &str) -> Result<Notes> {
    let (_, notes) = all_consuming(notes)(input.trim_end())
        .map_err(|e| miette!("Failed to parse ticket notes: {e}"))?;
    Ok(notes)
}

impl Notes<'_> {
    fn is_plausible(&self, value: u64) -> bool {
        self.fields.iter().any(|f| f.accepts(value))
    }

    /// Which ticket column each field lives in, by elimination: repeatedly
    /// pin the field that has exactly one column left.
    fn field_columns(&self) -> Result<HashMap<&str, usize>> {
        let valid = self
            .nearby
            .iter()
            .filter(|t| t.iter().all(|&v| self.is_plausible(v)))
            .collect::<Vec<_>>();

        let columns = self.mine.len();
        let mut candidates = self
            .fields
            .iter()
            .map(|field| {
                let columns = (0..columns)
                    .filter(|&col| valid.iter().all(|t| t.get(col).is_some_and(|&v| field.accepts(v))))
                    .collect::<Vec<_>>();
                (field.name, columns)
            })
            .collect::<Vec<_>>();

        let mut assigned = HashMap::new();
        while !candidates.is_empty() {
            let pinned = candidates
                .iter()
                .position(|(_, cols)| cols.len() == 1)
                .ok_or_else(|| miette!("Field columns are ambiguous"))?;
            let (name, cols) = candidates.swap_remove(pinned);
            let column = cols[0];
            for (_, others) in &mut candidates {
                others.retain(|&c| c != column);
            }
            assigned.insert(name, column);
        }
        Ok(assigned)
    }
}

/// Ticket scanning error rate: sum of nearby values no field accepts.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let notes = parse_input(input)?;
    let rate: u64 = notes
        .nearby
        .iter()
        .flatten()
        .filter(|&&v| !notes.is_plausible(v))
        .sum();
    Ok(rate.to_string())
}

/// Product of the values on our ticket for every field named "departure ...".
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let notes = parse_input(input)?;
    let columns = notes.field_columns()?;
    let product: u64 = columns
        .iter()
        .filter(|(name, _)| name.starts_with("departure"))
        .map(|(_, &col)| notes.mine[col])
        .product();
    Ok(product.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part1() -> Result<()> {
        let input = "\
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12";
        assert_eq!("71", part1(input)?);
        Ok(())
    }

    #[test]
    fn test_field_columns() -> Result<()> {
        let input = "\
departure class: 0-1 or 4-19
row: 0-5 or 8-19
departure seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9";
        let notes = parse_input(input)?;
        let columns = notes.field_columns()?;
        assert_eq!(Some(&1), columns.get("departure class"));
        assert_eq!(Some(&0), columns.get("row"));
        assert_eq!(Some(&2), columns.get("departure seat"));
        assert_eq!("156", part2(input)?);
        Ok(())
    }
}
