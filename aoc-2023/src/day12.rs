use std::collections::HashMap;

use miette::{miette, IntoDiagnostic, Result};

const UNFOLD: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Record {
    springs: Vec<u8>,
    groups: Vec<usize>,
}

impl Record {
    fn parse(line: &str) -> Result<Self> {
        let (springs, groups) = line
            .trim()
            .split_once(' ')
            .ok_or_else(|| miette!("Record needs springs and groups: {line:?}"))?;
        if let Some(c) = springs.bytes().find(|c| !b".#?".contains(c)) {
            return Err(miette!("Unexpected spring {:?}", c as char));
        }
        let groups = groups
            .split(',')
            .map(|n| n.parse::<usize>().into_diagnostic())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            springs: springs.as_bytes().to_vec(),
            groups,
        })
    }

    fn unfold(&self) -> Self {
        let mut springs = self.springs.clone();
        for _ in 1..UNFOLD {
            springs.push(b'?');
            springs.extend_from_slice(&self.springs);
        }
        Self {
            springs,
            groups: self.groups.repeat(UNFOLD),
        }
    }

    /// Ways to replace every `?` so the damaged runs match `groups`.
    fn arrangements(&self) -> u64 {
        let mut cache = HashMap::new();
        count(&self.springs, &self.groups, &mut cache)
    }
}

/// Arrangements of `springs` for `groups`, memoized on how much of each is
/// left.
fn count<'a>(
    springs: &'a [u8],
    groups: &'a [usize],
    cache: &mut HashMap<(usize, usize), u64>,
) -> u64 {
    let Some((&group, rest)) = groups.split_first() else {
        return u64::from(!springs.contains(&b'#'));
    };
    let key = (springs.len(), groups.len());
    if let Some(&known) = cache.get(&key) {
        return known;
    }

    let mut total = 0;
    for start in 0..springs.len() {
        // everything skipped over must be operational
        if start > 0 && springs[start - 1] == b'#' {
            break;
        }
        let end = start + group;
        if end > springs.len() {
            break;
        }
        let fits = !springs[start..end].contains(&b'.')
            && springs.get(end).map_or(true, |&c| c != b'#');
        if fits {
            let next = (end + 1).min(springs.len());
            total += count(&springs[next..], rest, cache);
        }
    }
    cache.insert(key, total);
    total
}

fn parse_input(input: &str) -> Result<Vec<Record>> {
    input.lines().map(Record::parse).collect()
}

#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let total: u64 = parse_input(input)?.iter().map(Record::arrangements).sum();
    Ok(total.to_string())
}

/// Same count with every record unfolded five times.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let total: u64 = parse_input(input)?
        .iter()
        .map(|r| {
            let n = r.unfold().arrangements();
            tracing::trace!(springs = %String::from_utf8_lossy(&r.springs), n);
            n
        })
        .sum();
    Ok(total.to_string())
}
