//! Plumbing shared by every puzzle binary: argument parsing for the input
//! file, tracing setup, timing of each solution, and the couple of numeric
//! helpers more than one day reaches for.

pub mod bits;
pub mod math;
mod runner;

pub use runner::{init_tracing, read_input, report, solve, InputArgs, Part};
