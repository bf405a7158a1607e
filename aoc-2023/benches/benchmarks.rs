use aoc_2023::*;

fn main() {
    divan::main();
}

const PLATFORM: &str = "\
O....#....
O.OO#....#
.....##...
OO.#O....O
.O.....O#.
O.#..O.#.#
..O..#O..O
.......O..
#....###..
#OO..#....";

const CITY: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

#[divan::bench]
fn day12_part2() {
    day12::part2(divan::black_box("?###???????? 3,2,1\n.??..??...?##. 1,1,3")).unwrap();
}

#[divan::bench(args = [1_000, 1_000_000_000])]
fn day14_part2(cycles: usize) {
    day14::part2(divan::black_box(PLATFORM), cycles).unwrap();
}

#[divan::bench]
fn day17_part2() {
    day17::part2(divan::black_box(CITY)).unwrap();
}

#[divan::bench]
fn day18_part2() {
    day18::part2(divan::black_box("R 6 (#70c710)\nD 5 (#0dc571)\nL 2 (#5713f0)\nU 5 (#d2c081)")).unwrap();
}
