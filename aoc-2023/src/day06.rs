use miette::{miette, IntoDiagnostic, Result};

fn parse_line<'a>(line: Option<&'a str>, label: &str) -> Result<Vec<&'a str>> {
    let line = line.ok_or_else(|| miette!("Missing {label} line"))?;
    let values = line
        .trim()
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| miette!("Expected {label}: in {line:?}"))?;
    Ok(values.split_whitespace().collect())
}

fn parse_input(input: &str) -> Result<(Vec<&str>, Vec<&str>)> {
    let mut lines = input.lines();
    let times = parse_line(lines.next(), "Time")?;
    let records = parse_line(lines.next(), "Distance")?;
    if times.len() != records.len() {
        return Err(miette!("Every race needs a time and a record"));
    }
    Ok((times, records))
}

/// Hold times that beat `record` in a race lasting `time`.
///
/// Distance `h * (time - h)` rises until half time, so binary search for
/// the first winning hold; the winning holds sit symmetrically around it.
fn ways_to_win(time: u64, record: u64) -> u64 {
    let beats = |h: u64| h * (time - h) > record;
    let (mut lo, mut hi) = (0, time / 2);
    if !beats(hi) {
        return 0;
    }
    while lo < hi {
        let mid = (lo + hi) / 2;
        if beats(mid) {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }
    time - 2 * lo + 1
}

/// Product of the ways to win each race.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (times, records) = parse_input(input)?;
    let product = times
        .iter()
        .zip(&records)
        .map(|(t, r)| Ok(ways_to_win(t.parse().into_diagnostic()?, r.parse().into_diagnostic()?)))
        .product::<Result<u64>>()?;
    Ok(product.to_string())
}

/// Ways to win the single race read by ignoring the spaces.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (times, records) = parse_input(input)?;
    let time = times.concat().parse::<u64>().into_diagnostic()?;
    let record = records.concat().parse::<u64>().into_diagnostic()?;
    Ok(ways_to_win(time, record).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const INPUT: &str = "Time:      7  15   30\nDistance:  9  40  200";

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("288", part1(INPUT)?);
        Ok(())
    }

    #[test]
    fn test_part2() -> Result<()> {
        assert_eq!("71503", part2(INPUT)?);
        Ok(())
    }

    #[rstest]
    #[case(7, 9, 4)]
    #[case(15, 40, 8)]
    #[case(30, 200, 9)]
    #[case(4, 100, 0)]
    fn test_ways_to_win(#[case] time: u64, #[case] record: u64, #[case] expected: u64) {
        assert_eq!(expected, ways_to_win(time, record));
    }
}
