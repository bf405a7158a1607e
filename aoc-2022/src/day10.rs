use miette::{miette, IntoDiagnostic, Result};

const WIDTH: usize = 40;

/// The X register during each cycle, starting with cycle 1.
fn register_values(input: &str) -> Result<Vec<i32>> {
    let mut x = 1;
    let mut values = Vec::new();
    for line in input.lines().map(str::trim) {
        match line.split_once(' ') {
            None if line == "noop" => values.push(x),
            Some(("addx", v)) => {
                values.extend([x, x]);
                x += v.parse::<i32>().into_diagnostic()?;
            }
            _ => return Err(miette!("Unknown instruction {line:?}")),
        }
    }
    values.push(x);
    Ok(values)
}

/// Sum of signal strengths at cycles 20, 60, 100, 140, 180 and 220.
#[tracing::instrument(skip(input))]
pub fn part1(input: &str) -> Result<String> {
    let values = register_values(input)?;
    let sum: i32 = (20..=220)
        .step_by(WIDTH)
        .filter_map(|cycle| values.get(cycle - 1).map(|x| cycle as i32 * x))
        .sum();
    Ok(sum.to_string())
}

/// The CRT image, one line per screen row.
#[tracing::instrument(skip(input))]
pub fn part2(input: &str) -> Result<String> {
    let values = register_values(input)?;
    let rows = values
        .chunks(WIDTH)
        .filter(|row| row.len() == WIDTH)
        .map(|row| {
            row.iter()
                .enumerate()
                .map(|(pixel, x)| if (pixel as i32 - x).abs() <= 1 { '#' } else { '.' })
                .collect::<String>()
        })
        .collect::<Vec<_>>();
    Ok(rows.join("\n"))
}
