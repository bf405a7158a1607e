use std::collections::{BTreeMap, HashSet};

use itertools::Itertools;
use miette::{miette, Result};
use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, char, line_ending, space1},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::{delimited, terminated},
    IResult,
};

#[derive(Debug)]
struct Food<'a> {
    ingredients: Vec<&'a str>,
    allergens: Vec<&'a str>,
}

fn food(input: &str) -> IResult<&str, Food> {
    let (input, ingredients) = terminated(separated_list1(space1, alpha1), space1)(input)?;
    let (input, allergens) = delimited(
        tag("(contains "),
        separated_list1(tag(", "), alpha1),
        char(')'),
    )(input)?;
    Ok((
        input,
        Food {
            ingredients,
            allergens,
        },
    ))
}

fn parse_input(input: &str) -> Result<Vec<Food>> {
    let (_, foods) = all_consuming(separated_list1(line_ending, food))(input.trim_end())
        .map_err(|e| miette!("Failed to parse food list: {e}"))?;
    Ok(foods)
}

/// Allergen to the single ingredient that carries it. An allergen can only
/// hide in ingredients present in every food that lists it; the rest is
/// resolved by repeatedly pinning allergens with one candidate left.
fn dangerous<'a>(foods: &[Food<'a>]) -> Result<BTreeMap<&'a str, &'a str>> {
    let mut candidates: BTreeMap<&str, HashSet<&str>> = BTreeMap::new();
    for food in foods {
        let ingredients = food.ingredients.iter().copied().collect::<HashSet<_>>();
        for &allergen in &food.allergens {
            candidates
                .entry(allergen)
                .and_modify(|c| c.retain(|i| ingredients.contains(i)))
                .or_insert_with(|| ingredients.clone());
        }
    }

    let mut resolved = BTreeMap::new();
    while !candidates.is_empty() {
        let (allergen, ingredient) = candidates
            .iter()
            .find(|(_, c)| c.len() == 1)
            .and_then(|(&a, c)| c.iter().next().map(|&i| (a, i)))
            .ok_or_else(|| miette!("Allergens cannot be resolved"))?;
        candidates.remove(&allergen);
        for others in candidates.values_mut() {
            others.remove(&ingredient);
        }
        resolved.insert(allergen, ingredient);
    }
    Ok(resolved)
}

/// Appearances of ingredients that cannot contain any allergen.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let foods = parse_input(input)?;
    let unsafe_ingredients = dangerous(&foods)?.into_values().collect::<HashSet<_>>();
    let count = foods
        .iter()
        .flat_map(|f| f.ingredients.iter())
        .filter(|i| !unsafe_ingredients.contains(*i))
        .count();
    Ok(count.to_string())
}

/// Canonical dangerous ingredient list, sorted by allergen.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let foods = parse_input(input)?;
    Ok(dangerous(&foods)?.into_values().join(","))
}
