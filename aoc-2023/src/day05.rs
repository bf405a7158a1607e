use miette::{miette, Result};
use nom::{
    bytes::complete::{tag, take_until},
    character::complete::{line_ending, multispace1, space1, u64},
    combinator::{all_consuming, map},
    multi::separated_list1,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};

/// A run of consecutive ids: start and length.
type Segment = (u64, u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MapRange {
    dest: u64,
    src: u64,
    len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Category {
    /// Sorted by source start.
    ranges: Vec<MapRange>,
}

impl Category {
    fn map_value(&self, v: u64) -> u64 {
        self.ranges
            .iter()
            .find(|r| (r.src..r.src + r.len).contains(&v))
            .map_or(v, |r| r.dest + (v - r.src))
    }

    /// Splits `segment` at range boundaries and maps each piece. Ids no
    /// range covers keep their number.
    fn map_segment(&self, (start, len): Segment) -> Vec<Segment> {
        let end = start + len;
        let mut cursor = start;
        let mut mapped = Vec::new();
        for r in &self.ranges {
            let Some((from, len)) = overlap((cursor, end - cursor), (r.src, r.len)) else {
                if r.src >= end {
                    break;
                }
                continue;
            };
            if from > cursor {
                mapped.push((cursor, from - cursor));
            }
            mapped.push((r.dest + (from - r.src), len));
            cursor = from + len;
        }
        if cursor < end {
            mapped.push((cursor, end - cursor));
        }
        mapped
    }
}

/// The part of `segment` inside `other`, if they share any id.
fn overlap((a, a_len): Segment, (b, b_len): Segment) -> Option<Segment> {
    let start = a.max(b);
    let end = (a + a_len).min(b + b_len);
    (start < end).then(|| (start, end - start))
}

fn category(input: &str) -> IResult<&str, Category> {
    map(
        preceded(
            tuple((take_until(" map:"), tag(" map:"), line_ending)),
            separated_list1(
                line_ending,
                tuple((u64, preceded(space1, u64), preceded(space1, u64))),
            ),
        ),
        |triples| {
            let mut ranges = triples
                .into_iter()
                .map(|(dest, src, len)| MapRange { dest, src, len })
                .collect::<Vec<_>>();
            ranges.sort_unstable_by_key(|r| r.src);
            Category { ranges }
        },
    )(input)
}

fn parse_input(input: &str) -> Result<(Vec<u64>, Vec<Category>)> {
    let (_, almanac) = all_consuming(separated_pair(
        preceded(tag("seeds: "), separated_list1(space1, u64)),
        multispace1,
        separated_list1(multispace1, category),
    ))(input.trim())
    .map_err(|e| miette!("Failed to parse almanac: {e}"))?;
    Ok(almanac)
}

/// Lowest location of any listed seed.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let (seeds, categories) = parse_input(input)?;
    let lowest = seeds
        .iter()
        .map(|&seed| categories.iter().fold(seed, |v, c| c.map_value(v)))
        .min()
        .ok_or_else(|| miette!("No seeds"))?;
    Ok(lowest.to_string())
}

/// Lowest location when the seed list holds (start, length) pairs.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let (seeds, categories) = parse_input(input)?;
    if seeds.len() % 2 != 0 {
        return Err(miette!("Seed ranges must come in pairs"));
    }
    let seed_segments = seeds
        .chunks(2)
        .map(|pair| (pair[0], pair[1]))
        .collect::<Vec<_>>();
    let locations = categories.iter().fold(seed_segments, |segments, c| {
        segments.into_iter().flat_map(|s| c.map_segment(s)).collect()
    });
    tracing::debug!(segments = locations.len());
    let lowest = locations
        .iter()
        .filter(|(_, len)| *len > 0)
        .map(|(start, _)| *start)
        .min()
        .ok_or_else(|| miette!("No seeds"))?;
    Ok(lowest.to_string())
}
