//! # Hyperball
//!
//! Entry point for the `hyperball` binary.
//!
//! Estimates the volume of an n-dimensional ball by Monte Carlo sampling and
//! prints the estimate as a single line on stdout. Diagnostics go to stderr.
//! With no flags the run matches the classic setup: unit radius, 37
//! dimensions, 100 000 samples.

mod app;
mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(&cli)
}
