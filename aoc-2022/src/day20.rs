use miette::{miette, IntoDiagnostic, Result};

const DECRYPTION_KEY: i64 = 811_589_153;
const OFFSETS: [usize; 3] = [1000, 2000, 3000];

fn parse_input(input: &str) -> Result<Vec<i64>> {
    let numbers = input
        .lines()
        .map(|line| line.trim().parse::<i64>().into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    if numbers.iter().filter(|&&n| n == 0).count() != 1 {
        return Err(miette!("File must contain exactly one zero"));
    }
    Ok(numbers)
}

/// Mixes the numbers `rounds` times, then sums the grove coordinates.
fn grove_sum(numbers: &[i64], rounds: usize) -> i64 {
    // Positions hold indices into `numbers`, so duplicates stay distinct.
    let mut order = (0..numbers.len()).collect::<Vec<_>>();
    let cycle = numbers.len() as i64 - 1;
    for _ in 0..rounds {
        for (id, &n) in numbers.iter().enumerate() {
            let Some(at) = order.iter().position(|&o| o == id) else {
                continue;
            };
            order.remove(at);
            let to = (at as i64 + n).rem_euclid(cycle.max(1)) as usize;
            order.insert(to, id);
        }
    }
    let mixed = order.iter().map(|&i| numbers[i]).collect::<Vec<_>>();
    let zero = mixed.iter().position(|&n| n == 0).unwrap_or(0);
    OFFSETS
        .iter()
        .map(|offset| mixed[(zero + offset) % mixed.len()])
        .sum()
}

/// Grove coordinates after one round of mixing.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(grove_sum(&parse_input(input)?, 1).to_string())
}

/// Grove coordinates after applying the key and mixing ten times.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let numbers = parse_input(input)?
        .into_iter()
        .map(|n| n * DECRYPTION_KEY)
        .collect::<Vec<_>>();
    Ok(grove_sum(&numbers, 10).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "1\n2\n-3\n3\n-2\n0\n4";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("3", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("1623178306", part2(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_needs_one_zero() {
        assert!(parse_input("1\n2").is_err());
    }
}
