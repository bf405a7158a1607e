use miette::{miette, Result};

/// Characters read once the last `size` characters are all different.
fn marker_end(stream: &str, size: usize) -> Result<usize> {
    stream
        .as_bytes()
        .windows(size)
        .position(|window| {
            let seen = window.iter().fold(0u32, |set, c| set | 1 << (c - b'a'));
            seen.count_ones() as usize == size
        })
        .map(|start| start + size)
        .ok_or_else(|| miette!("No marker of size {size}"))
}

fn parse_input(input: &str) -> Result<&str> {
    let stream = input.trim();
    if !stream.bytes().all(|c| c.is_ascii_lowercase()) {
        return Err(miette!("Datastream must be lowercase letters"));
    }
    Ok(stream)
}

/// Start-of-packet marker position.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    Ok(marker_end(parse_input(input)?, 4)?.to_string())
}

/// Start-of-message marker position.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    Ok(marker_end(parse_input(input)?, 14)?.to_string())
}
