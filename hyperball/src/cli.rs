use clap::Parser;
use hypersphere::{DEFAULT_DIMENSIONS, DEFAULT_RADIUS, DEFAULT_SAMPLES};
use sampling::SeedSource;

/// Estimate the volume of an n-dimensional ball by Monte Carlo sampling.
#[derive(Parser, Debug)]
#[command(name = "hyperball", version)]
pub struct Cli {
    /// Radius of the ball.
    #[arg(long, default_value_t = DEFAULT_RADIUS, allow_negative_numbers = true)]
    pub radius: f64,

    /// Number of spatial dimensions.
    #[arg(long, default_value_t = DEFAULT_DIMENSIONS)]
    pub dimensions: u32,

    /// Number of points drawn from the bounding hypercube.
    #[arg(long, default_value_t = DEFAULT_SAMPLES)]
    pub samples: u64,

    /// Seed for the random generator. A random seed is chosen and logged when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log accept counts and the closed-form reference volume.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn seed_source(&self) -> SeedSource {
        SeedSource::from(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply_without_flags() {
        let cli = Cli::try_parse_from(["hyperball"]).unwrap();
        assert!((cli.radius - DEFAULT_RADIUS).abs() < f64::EPSILON);
        assert_eq!(cli.dimensions, DEFAULT_DIMENSIONS);
        assert_eq!(cli.samples, DEFAULT_SAMPLES);
        assert_eq!(cli.seed_source(), SeedSource::Entropy);
        assert!(!cli.verbose);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "hyperball", "--radius", "2.5", "--dimensions", "3", "--samples", "10", "--seed", "42",
        ])
        .unwrap();
        assert!((cli.radius - 2.5).abs() < f64::EPSILON);
        assert_eq!(cli.dimensions, 3);
        assert_eq!(cli.samples, 10);
        assert_eq!(cli.seed_source(), SeedSource::Fixed(42));
    }

    #[test]
    fn negative_radius_reaches_validation() {
        let cli = Cli::try_parse_from(["hyperball", "--radius", "-1"]).unwrap();
        assert!(cli.radius < 0.0);
    }

    #[test]
    fn negative_counts_fail_to_parse() {
        assert!(Cli::try_parse_from(["hyperball", "--samples", "-5"]).is_err());
        assert!(Cli::try_parse_from(["hyperball", "--dimensions", "abc"]).is_err());
    }
}
