use aoc_2018::*;

fn main() {
    divan::main();
}

#[divan::bench]
fn day01_part2() {
    day01::part2(divan::black_box("+7\n+7\n-2\n-7\n-4")).unwrap();
}

#[divan::bench]
fn day02_part2() {
    day02::part2(divan::black_box("abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz")).unwrap();
}

#[divan::bench]
fn day02_part2_pairwise() {
    day02::part2_pairwise(divan::black_box("abcde\nfghij\nklmno\npqrst\nfguij\naxcye\nwvxyz"))
        .unwrap();
}
