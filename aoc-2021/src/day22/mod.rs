mod cuboid;

use miette::{miette, Result};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{i64, line_ending},
    combinator::{all_consuming, map, value},
    multi::separated_list1,
    sequence::{preceded, separated_pair, tuple},
    IResult,
};
use rayon::prelude::*;

use cuboid::{Cuboid, Reactor};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Step {
    on: bool,
    cuboid: Cuboid,
}

fn range(input: &str) -> IResult<&str, (i64, i64)> {
    separated_pair(i64, tag(".."), i64)(input)
}

fn step(input: &str) -> IResult<&str, Step> {
    let (input, on) = alt((value(true, tag("on ")), value(false, tag("off "))))(input)?;
    map(
        tuple((
            preceded(tag("x="), range),
            preceded(tag(",y="), range),
            preceded(tag(",z="), range),
        )),
        move |(x, y, z)| Step {
            on,
            cuboid: Cuboid::new(x, y, z),
        },
    )(input)
}

fn parse_input(input: &str) -> Result<Vec<Step>> {
    let (_, steps) = all_consuming(separated_list1(line_ending, step))(input.trim_end())
        .map_err(|e| miette!("Failed to parse reboot steps: {e}"))?;
    if let Some(bad) = steps
        .iter()
        .find(|s| [s.cuboid.x, s.cuboid.y, s.cuboid.z].iter().any(|(lo, hi)| lo > hi))
    {
        return Err(miette!("Reversed range in {:?}", bad.cuboid));
    }
    Ok(steps)
}

fn reboot<'a>(steps: impl IntoIterator<Item = &'a Step>) -> Reactor {
    let mut reactor = Reactor::default();
    for step in steps {
        if step.on {
            reactor.turn_on(step.cuboid);
        } else {
            reactor.turn_off(step.cuboid);
        }
    }
    reactor
}

/// Steps cropped to `region`, dropping those entirely outside it.
fn cropped(steps: &[Step], region: &Cuboid) -> Vec<Step> {
    steps
        .iter()
        .filter_map(|s| {
            s.cuboid.crop(region).map(|cuboid| Step {
                on: s.on,
                cuboid,
            })
        })
        .collect()
}

/// Cubes lit inside the -50..=50 initialization region.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let steps = parse_input(input)?;
    let region = Cuboid::new((-50, 50), (-50, 50), (-50, 50));
    let reactor = reboot(&cropped(&steps, &region));
    Ok(reactor.lit_cubes().to_string())
}

/// Cubes lit after the full reboot.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let steps = parse_input(input)?;
    let reactor = reboot(&steps);
    tracing::debug!(pieces = reactor.pieces());
    Ok(reactor.lit_cubes().to_string())
}

/// The full reboot with the x axis cut into one slab per rayon thread.
/// Slabs are disjoint, so each is rebooted on its own and the counts summed.
#[tracing::instrument(skip(input))]
pub fn part2_parallel(input: &str) -> Result<String> {
    let steps = parse_input(input)?;
    let bounds = |axis: fn(&Cuboid) -> (i64, i64)| {
        steps.iter().fold((i64::MAX, i64::MIN), |(lo, hi), s| {
            let (a, b) = axis(&s.cuboid);
            (lo.min(a), hi.max(b))
        })
    };
    let (x, y, z) = (bounds(|c| c.x), bounds(|c| c.y), bounds(|c| c.z));

    let shards = rayon::current_num_threads() as i64;
    let width = (x.1 - x.0 + 1 + shards - 1) / shards;
    let total: i64 = (0..shards)
        .into_par_iter()
        .filter_map(|i| {
            let lo = x.0 + i * width;
            let hi = (lo + width - 1).min(x.1);
            (lo <= hi).then(|| Cuboid::new((lo, hi), y, z))
        })
        .map(|slab| {
            let lit = reboot(&cropped(&steps, &slab)).lit_cubes();
            tracing::debug!(x = ?slab.x, lit, "slab done");
            lit
        })
        .sum();
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const SMALL: &str = "\
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10";

    const OUTSIDE: &str = "\
on x=10..12,y=10..12,z=10..12
on x=11..13,y=11..13,z=11..13
off x=9..11,y=9..11,z=9..11
on x=10..10,y=10..10,z=10..10
on x=100..101,y=0..1,z=-60..-59";

    const REBOOT: &str = "\
on x=-5..47,y=-31..22,z=-19..33
on x=-44..5,y=-27..21,z=-14..35
on x=-49..-1,y=-11..42,z=-10..38
on x=-20..34,y=-40..6,z=-44..1
off x=26..39,y=40..50,z=-2..11
on x=-41..5,y=-41..6,z=-36..8
off x=-43..-33,y=-45..-28,z=7..25
on x=-33..15,y=-32..19,z=-34..11
off x=35..47,y=-46..-34,z=-11..5
on x=-14..36,y=-6..44,z=-16..29
on x=-57795..-6158,y=29564..72030,z=20435..90618
on x=36731..105352,y=-21140..28532,z=16094..90401
on x=30999..107136,y=-53464..15513,z=8553..71215
on x=13528..83982,y=-99403..-27377,z=-24141..23996
on x=-72682..-12347,y=18159..111354,z=7391..80950
on x=-1060..80757,y=-65301..-20884,z=-103788..-16709
on x=-83015..-9461,y=-72160..-8347,z=-81239..-26856
on x=-52752..22273,y=-49450..9096,z=54442..119054
on x=-29982..40483,y=-108474..-28371,z=-24328..38471
on x=-4958..62750,y=40422..118853,z=-7672..65583
on x=55694..108686,y=-43367..46958,z=-26781..48729
on x=-98497..-18186,y=-63569..3412,z=1232..88485
on x=-726..56291,y=-62629..13224,z=18033..85226
on x=-110886..-34664,y=-81338..-8658,z=8914..63723
on x=-55829..24974,y=-16897..54165,z=-121762..-28058
on x=-65152..-11147,y=22489..91432,z=-58782..1780
on x=-120100..-32970,y=-46592..27473,z=-11695..61039
on x=-18631..37533,y=-124565..-50804,z=-35667..28308
on x=-57817..18248,y=49321..117703,z=5745..55881
on x=14781..98692,y=-1341..70827,z=15753..70151
on x=-34419..55919,y=-19626..40991,z=39015..114138
on x=-60785..11593,y=-56135..2999,z=-95368..-26915
on x=-32178..58085,y=17647..101866,z=-91405..-8878
on x=-53655..12091,y=50097..105568,z=-75335..-4862
on x=-111166..-40997,y=-71714..2688,z=5609..50954
on x=-16602..70118,y=-98693..-44401,z=5197..76897
on x=16383..101554,y=4615..83635,z=-44907..18747
off x=-95822..-15171,y=-19987..48940,z=10804..104439
on x=-89813..-14614,y=16069..88491,z=-3297..45228
on x=41075..99376,y=-20427..49978,z=-52012..13762
on x=-21330..50085,y=-17944..62733,z=-112280..-30197
on x=-16478..35915,y=36008..118594,z=-7885..47086
off x=-98156..-27851,y=-49952..43171,z=-99005..-8456
off x=2032..69770,y=-71013..4824,z=7471..94418
on x=43670..120875,y=-42068..12382,z=-24787..38892
off x=37514..111226,y=-45862..25743,z=-16714..54663
off x=25699..97951,y=-30668..59918,z=-15349..69697
off x=-44271..17935,y=-9516..60759,z=49131..112598
on x=-61695..-5813,y=40978..94975,z=8655..80240
off x=-101086..-9439,y=-7088..67543,z=33935..83858
off x=18020..114017,y=-48931..32606,z=21474..89843
off x=-77139..10506,y=-89994..-18797,z=-80..59318
off x=8476..79288,y=-75520..11602,z=-96624..-24783
on x=-47488..-1262,y=24338..100707,z=16292..72967
off x=-84341..13987,y=2429..92914,z=-90671..-1318
off x=-37810..49457,y=-71013..-7894,z=-105357..-13188
off x=-27365..46395,y=31009..98017,z=15428..76570
off x=-70369..-16548,y=22648..78696,z=-1892..86821
on x=-53470..21291,y=-120233..-33476,z=-44150..38147
off x=-93533..-4276,y=-16170..68771,z=-104985..-24507";

    #[rstest]
    #[case(SMALL, "39")]
    #[case(OUTSIDE, "39")]
    #[case(REBOOT, "474140")]
    fn test_part1(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part1(input)?);
        Ok(())
    }

    #[rstest]
    #[case(SMALL, "39")]
    #[case(OUTSIDE, "47")]
    #[case(REBOOT, "2758514936282235")]
    fn test_part2(#[case] input: &str, #[case] expected: &str) -> Result<()> {
        assert_eq!(expected, part2(input)?);
        assert_eq!(expected, part2_parallel(input)?);
        Ok(())
    }

    #[test]
    fn test_reversed_range() {
        assert!(parse_input("on x=3..1,y=0..0,z=0..0").is_err());
    }
}
