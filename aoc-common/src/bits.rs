/// Returns the bit of `input` at `position` (0 or 1).
pub fn mask(input: u64, position: u32) -> u64 {
    (input >> position) & 1
}

/// Inverts the lowest `digits` bits of `input`, clearing everything above.
pub fn flip(input: u64, digits: u32) -> u64 {
    let width = if digits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << digits) - 1
    };
    !input & width
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0b10110, 0, 0)]
    #[case(0b10110, 1, 1)]
    #[case(0b10110, 3, 0)]
    #[case(0b10110, 4, 1)]
    #[case(0b10110, 9, 0)]
    fn test_mask(#[case] input: u64, #[case] position: u32, #[case] expected: u64) {
        assert_eq!(expected, mask(input, position));
    }

    #[test]
    fn test_flip() {
        assert_eq!(0b01001, flip(0b10110, 5));
        assert_eq!(0b001, flip(0b10110, 3));
        assert_eq!(0, flip(u64::MAX, 64));
    }
}
