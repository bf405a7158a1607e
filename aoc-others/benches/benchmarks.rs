use aoc_others::repetition;

fn main() {
    divan::main();
}

#[divan::bench(args = [2, 3, 4])]
fn slowest_kaprekar(digits: u32) {
    repetition::slowest_kaprekar(divan::black_box(digits)).unwrap();
}

#[divan::bench]
fn logistic() {
    repetition::logistic(divan::black_box(0.5), 3.5, repetition::DEFAULT_LIMIT).unwrap();
}
