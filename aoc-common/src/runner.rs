use std::{
    fmt::Display,
    fs,
    path::{Path, PathBuf},
    time::Instant,
};

use clap::Args;
use miette::{Context, IntoDiagnostic, Result};
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

/// The `--file` flag every puzzle takes.
#[derive(Debug, Clone, Args)]
pub struct InputArgs {
    /// Path to the puzzle input
    #[arg(long)]
    pub file: PathBuf,
}

impl InputArgs {
    pub fn read(&self) -> Result<String> {
        read_input(&self.file)
    }
}

/// Reads a puzzle input as UTF-8, dropping trailing line breaks.
///
/// Leading whitespace is kept since some inputs (crate stacks, for one)
/// are column-aligned.
pub fn read_input(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read input file {}", path.display()))?;
    tracing::debug!(bytes = content.len(), "read {}", path.display());
    Ok(content.trim_end_matches(['\r', '\n']).to_string())
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `default_directive`.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::NONE)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one solution, printing how long it took followed by its answer.
pub fn report<T: Display>(label: &str, solve: impl FnOnce() -> Result<T>) -> Result<()> {
    let start = Instant::now();
    let answer = solve().wrap_err_with(|| format!("{label} failed"))?;
    let elapsed = start.elapsed();
    println!("{label}: {:.3} ms", elapsed.as_secs_f64() * 1000.0);
    println!("{answer}");
    Ok(())
}

/// A puzzle half: raw input in, printable answer out.
pub type Part = fn(&str) -> Result<String>;

/// Reads the input once and reports each part in order as "Solution N".
pub fn solve(args: &InputArgs, parts: &[Part]) -> Result<()> {
    let input = args.read()?;
    for (i, part) in parts.iter().enumerate() {
        report(&format!("Solution {}", i + 1), || part(&input))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_input_trims_trailing_newlines() -> Result<()> {
        let path = std::env::temp_dir().join(format!("aoc-common-{}.txt", std::process::id()));
        fs::write(&path, "  1\n2\n\n").into_diagnostic()?;
        let content = read_input(&path)?;
        fs::remove_file(&path).into_diagnostic()?;
        assert_eq!("  1\n2", content);
        Ok(())
    }

    #[test]
    fn test_read_input_missing_file() {
        assert!(read_input(Path::new("/definitely/not/here.txt")).is_err());
    }

    #[test]
    fn test_solve_stops_at_first_failure() -> Result<()> {
        let path = std::env::temp_dir().join(format!("aoc-common-solve-{}.txt", std::process::id()));
        fs::write(&path, "abc").into_diagnostic()?;
        let args = InputArgs { file: path.clone() };
        let ok: Part = |input| Ok(input.len().to_string());
        let failing: Part = |_| Err(miette::miette!("unsolved"));
        let good = solve(&args, &[ok]);
        let bad = solve(&args, &[ok, failing]);
        fs::remove_file(&path).into_diagnostic()?;
        assert!(good.is_ok());
        assert!(bad.is_err());
        Ok(())
    }

    #[test]
    fn test_report_propagates_errors() {
        let result = report("Part 1", || -> Result<u32> { Err(miette::miette!("boom")) });
        assert!(result.is_err());
    }
}
