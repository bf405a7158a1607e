use std::collections::HashMap;

use miette::Result;

const REQUIRED_FIELDS: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

type Passport<'a> = HashMap<&'a str, &'a str>;

/// Passports are blank-line separated groups of whitespace separated `key:value` pairs.
fn parse_input(input: &str) -> Vec<Passport> {
    input
        .split("\n\n")
        .map(|block| {
            block
                .split_whitespace()
                .filter_map(|field| field.split_once(':'))
                .collect()
        })
        .collect()
}

fn has_required_fields(passport: &Passport) -> bool {
    REQUIRED_FIELDS.iter().all(|field| passport.contains_key(field))
}

fn year_in(value: &str, min: u32, max: u32) -> bool {
    value.len() == 4 && value.parse::<u32>().is_ok_and(|year| (min..=max).contains(&year))
}

fn is_valid_field(field: &str, value: &str) -> bool {
    match field {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => {
            if let Some(cm) = value.strip_suffix("cm") {
                cm.parse::<u32>().is_ok_and(|h| (150..=193).contains(&h))
            } else if let Some(inches) = value.strip_suffix("in") {
                inches.parse::<u32>().is_ok_and(|h| (59..=76).contains(&h))
            } else {
                false
            }
        }
        "hcl" => value
            .strip_prefix('#')
            .is_some_and(|hex| hex.len() == 6 && hex.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))),
        "ecl" => EYE_COLORS.contains(&value),
        "pid" => value.len() == 9 && value.bytes().all(|b| b.is_ascii_digit()),
        // cid and anything unknown is ignored
        _ => true,
    }
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let passports = parse_input(input);
    Ok(passports
        .iter()
        .filter(|p| has_required_fields(p))
        .count()
        .to_string())
}

#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let passports = parse_input(input);
    Ok(passports
        .iter()
        .filter(|p| has_required_fields(p) && p.iter().all(|(k, v)| is_valid_field(k, v)))
        .count()
        .to_string())
}
