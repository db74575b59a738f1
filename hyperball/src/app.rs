//! # Hyperball Application Logic
//!
//! [`run`] wires the pieces together: it installs the log subscriber, turns
//! the parsed flags into a validated [`EstimatorConfig`], builds the seeded
//! generator and prints the estimate.
//!
//! Logs are written to stderr so that stdout carries nothing but the
//! estimated volume.

use anyhow::{Context, Result};
use hypersphere::{estimate_volume, exact_volume, EstimatorConfig};
use tracing::Level;

use crate::cli::Cli;

/// Run one estimation and print the result.
///
/// # Errors
///
/// Returns an error when the configuration is invalid. Nothing is sampled
/// or printed to stdout in that case.
pub fn run(cli: &Cli) -> Result<()> {
    init_logging(cli.verbose);

    let config = EstimatorConfig::new(cli.radius, cli.dimensions, cli.samples)
        .context("invalid estimator configuration")?;

    let mut rng = sampling::default_source(cli.seed_source());

    tracing::info!(
        "Estimating volume of the radius {} ball in {} dimensions from {} samples...",
        config.radius,
        config.dimensions,
        config.samples
    );
    let estimate = estimate_volume(&config, &mut rng).context("estimation failed")?;

    tracing::debug!(
        "Accept fraction {} (closed-form volume {}).",
        estimate.accept_fraction(),
        exact_volume(config.dimensions, config.radius)
    );
    tracing::info!("Estimation finished with seed {}.", rng.seed());

    println!("{estimate}");
    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}
