//! Iterated maps that eventually revisit a value: Kaprekar's routine on the
//! digits of a number, and the logistic map rounded to a fixed precision.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::hash::Hash;

use miette::{miette, Result};
use rayon::prelude::*;

pub const DEFAULT_LIMIT: usize = 1_000_000;

/// Decimal places the logistic map is rounded to after every step.
const PRECISION: usize = 10;

/// How an iterated map settles down.
#[derive(Debug, Clone, PartialEq)]
pub struct Repetition<T> {
    /// Distinct values produced before one comes round again.
    pub steps: usize,
    /// The values that repeat forever, starting with the first revisited.
    pub cycle: Vec<T>,
}

/// Applies `step` from `start` until a produced value has been produced
/// before. The starting value only counts once it is produced again.
pub fn find_repetition<T, F>(start: T, mut step: F, limit: usize) -> Result<Repetition<T>>
where
    T: Clone + Eq + Hash,
    F: FnMut(&T) -> T,
{
    let mut seen = HashMap::new();
    let mut values = Vec::new();
    let mut current = start;
    while values.len() < limit {
        let next = step(&current);
        if let Some(&first) = seen.get(&next) {
            return Ok(Repetition {
                steps: values.len(),
                cycle: values.split_off(first),
            });
        }
        seen.insert(next.clone(), values.len());
        values.push(next.clone());
        current = next;
    }
    Err(miette!("No value repeated within {limit} steps"))
}

/// Digits sorted into descending order minus digits sorted ascending.
/// Leading zeros are dropped between steps, so 1000 goes to 999.
pub fn kaprekar_step(n: &u64) -> u64 {
    let mut digits = n.to_string().into_bytes();
    digits.sort_unstable();
    let ascending = digits.iter().fold(0, |v, d| v * 10 + u64::from(d - b'0'));
    let descending = digits.iter().rev().fold(0, |v, d| v * 10 + u64::from(d - b'0'));
    descending - ascending
}

#[tracing::instrument]
pub fn kaprekar(number: u64) -> Result<Repetition<u64>> {
    let repetition = find_repetition(number, kaprekar_step, DEFAULT_LIMIT)?;
    tracing::debug!(steps = repetition.steps, cycle = ?repetition.cycle);
    Ok(repetition)
}

/// The number with `digits` digits that takes the most Kaprekar steps to
/// reach its cycle, with that step count. Ties go to the smallest number.
#[tracing::instrument]
pub fn slowest_kaprekar(digits: u32) -> Result<(u64, usize)> {
    if !(1..=18).contains(&digits) {
        return Err(miette!("Numbers need 1 to 18 digits, not {digits}"));
    }
    let low = 10u64.pow(digits - 1);
    (low..low * 10)
        .into_par_iter()
        .map(|n| Ok((find_repetition(n, kaprekar_step, DEFAULT_LIMIT)?.steps, n)))
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .min_by_key(|&(steps, n)| (Reverse(steps), n))
        .map(|(steps, n)| (n, steps))
        .ok_or_else(|| miette!("No {digits}-digit numbers"))
}

/// One step of `x -> k x (1 - x)`, kept as its rounded decimal text so
/// equal values compare equal.
fn logistic_step(k: f64) -> impl Fn(&String) -> Result<String> {
    move |x| {
        let x: f64 = x
            .parse()
            .map_err(|e| miette!("Logistic value {x:?} is not a number: {e}"))?;
        Ok(format!("{:.PRECISION$}", k * x * (1.0 - x)))
    }
}

#[tracing::instrument]
pub fn logistic(x: f64, k: f64, limit: usize) -> Result<Repetition<String>> {
    if !(0.0..=1.0).contains(&x) || !(0.0..=4.0).contains(&k) {
        return Err(miette!("Need 0 <= x <= 1 and 0 <= k <= 4, got x={x} k={k}"));
    }
    let step = logistic_step(k);
    let mut failure = None;
    let repetition = find_repetition(
        format!("{x:.PRECISION$}"),
        |v| match step(v) {
            Ok(next) => next,
            Err(e) => {
                failure.get_or_insert(e);
                v.clone()
            }
        },
        limit,
    )?;
    if let Some(e) = failure {
        return Err(e);
    }
    tracing::debug!(steps = repetition.steps, period = repetition.cycle.len());
    Ok(repetition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(3524, 3087)]
    #[case(3087, 8352)]
    #[case(8352, 6174)]
    #[case(6174, 6174)]
    #[case(1000, 999)]
    #[case(1111, 0)]
    fn test_kaprekar_step(#[case] n: u64, #[case] expected: u64) {
        assert_eq!(expected, kaprekar_step(&n));
    }

    #[rstest]
    #[case(3524, 3, vec![6174])]
    #[case(6174, 1, vec![6174])]
    #[case(2222, 1, vec![0])]
    #[case(495, 1, vec![495])]
    fn test_kaprekar(
        #[case] number: u64,
        #[case] steps: usize,
        #[case] cycle: Vec<u64>,
    ) -> Result<()> {
        assert_eq!(Repetition { steps, cycle }, kaprekar(number)?);
        Ok(())
    }

    #[test]
    fn test_find_repetition() -> Result<()> {
        // 1 -> 2 -> 4 -> 3 -> 1 under doubling mod 5
        let repetition = find_repetition(1, |n| n * 2 % 5, 10)?;
        assert_eq!(4, repetition.steps);
        assert_eq!(vec![2, 4, 3, 1], repetition.cycle);
        assert!(find_repetition(0u64, |n| n + 1, 10).is_err());
        Ok(())
    }

    #[test]
    fn test_slowest_kaprekar() -> Result<()> {
        let (n, steps) = slowest_kaprekar(2)?;
        let expected = (10..100)
            .map(|n| find_repetition(n, kaprekar_step, 100).map(|r| r.steps))
            .collect::<Result<Vec<_>>>()?;
        let most = expected.iter().copied().max().unwrap_or_default();
        assert_eq!(most, steps);
        assert_eq!(10 + expected.iter().position(|&s| s == most).unwrap_or_default() as u64, n);
        assert!(slowest_kaprekar(0).is_err());
        Ok(())
    }

    #[test]
    fn test_logistic_fixed_point() -> Result<()> {
        let repetition = logistic(0.5, 2.0, 100)?;
        assert_eq!(vec!["0.5000000000".to_string()], repetition.cycle);
        Ok(())
    }

    #[test_log::test]
    fn test_logistic_period_two() -> Result<()> {
        let repetition = logistic(0.5, 3.2, DEFAULT_LIMIT)?;
        assert_eq!(2, repetition.cycle.len());
        Ok(())
    }

    #[test]
    fn test_logistic_bounds() {
        assert!(logistic(1.5, 2.0, 10).is_err());
        assert!(logistic(0.5, 5.0, 10).is_err());
    }
}
