use miette::{miette, IntoDiagnostic, Result};

const MODULUS: u64 = 20_201_227;
const SUBJECT: u64 = 7;

fn transform(subject: u64, loop_size: u64) -> u64 {
    let (mut base, mut exponent, mut value) = (subject % MODULUS, loop_size, 1);
    while exponent > 0 {
        if exponent & 1 == 1 {
            value = value * base % MODULUS;
        }
        base = base * base % MODULUS;
        exponent >>= 1;
    }
    value
}

/// Brute-force discrete log of `public_key` base 7.
fn loop_size(public_key: u64) -> Result<u64> {
    let mut value = 1;
    for size in 0..MODULUS {
        if value == public_key {
            return Ok(size);
        }
        value = value * SUBJECT % MODULUS;
    }
    Err(miette!("{public_key} is not a reachable public key"))
}

/// Encryption key the card and door agree on.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let keys = input
        .split_whitespace()
        .map(|s| s.parse::<u64>().into_diagnostic())
        .collect::<Result<Vec<_>>>()?;
    let [card, door] = keys[..] else {
        return Err(miette!("Expected two public keys, got {}", keys.len()));
    };
    let card_key = transform(door, loop_size(card)?);
    let door_key = transform(card, loop_size(door)?);
    if card_key != door_key {
        return Err(miette!("Encryption keys disagree: {card_key} vs {door_key}"));
    }
    Ok(card_key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loop_size() -> Result<()> {
        assert_eq!(8, loop_size(5764801)?);
        assert_eq!(11, loop_size(17807724)?);
        Ok(())
    }

    #[test]
    fn test_part1() -> Result<()> {
        assert_eq!("14897079", part1("5764801\n17807724")?);
        Ok(())
    }
}
