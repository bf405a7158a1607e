/// Greatest common divisor by Euclid's algorithm.
pub fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

pub fn lcm(a: u64, b: u64) -> u64 {
    if a == 0 || b == 0 {
        return 0;
    }
    a / gcd(a, b) * b
}

/// Least common multiple of every number in `numbers` (1 for an empty list).
pub fn lcm_all(numbers: impl IntoIterator<Item = u64>) -> u64 {
    numbers.into_iter().fold(1, lcm)
}
