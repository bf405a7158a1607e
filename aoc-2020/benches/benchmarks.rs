use aoc_2020::*;

fn main() {
    divan::main();
}

const SEATS: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL";

#[divan::bench]
fn day01_part2() {
    day01::part2(divan::black_box("1721\n979\n366\n299\n675\n1456")).unwrap();
}

#[divan::bench]
fn day01_brute_force() {
    day01::brute_force(divan::black_box("1721\n979\n366\n299\n675\n1456"), 3).unwrap();
}

#[divan::bench]
fn day11_part2() {
    day11::part2(divan::black_box(SEATS)).unwrap();
}

#[divan::bench]
fn day15_part1() {
    day15::part1(divan::black_box("0,3,6")).unwrap();
}

#[divan::bench]
fn day18_part2() {
    day18::part2(divan::black_box("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2")).unwrap();
}

#[divan::bench(args = [10, 100, 1000])]
fn day23_part1(moves: usize) {
    day23::part1(divan::black_box("389125467"), moves).unwrap();
}
