//! Command-line interface
//!
//! Argument parsing and the runner that executes the export job.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
