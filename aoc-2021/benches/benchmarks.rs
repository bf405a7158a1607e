use aoc_2021::*;

fn main() {
    divan::main();
}

const OCTOPUSES: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526";

const BURROW: &str = "\
#############
#...........#
###B#C#B#D###
  #A#D#C#A#
  #########";

#[divan::bench]
fn day06_part2() {
    day06::part2(divan::black_box("3,4,3,1,2")).unwrap();
}

#[divan::bench]
fn day11_part2() {
    day11::part2(divan::black_box(OCTOPUSES)).unwrap();
}

#[divan::bench]
fn day18_part2() {
    day18::part2(divan::black_box(
        "[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]\n[[[5,[2,8]],4],[5,[[9,9],0]]]\n[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]",
    ))
    .unwrap();
}

#[divan::bench]
fn day21_part2() {
    day21::part2(divan::black_box("4,8")).unwrap();
}

#[divan::bench]
fn day23_part1() {
    day23::part1(divan::black_box(BURROW)).unwrap();
}
