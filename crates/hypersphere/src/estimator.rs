use sampling::{Interval, UniformSource};

use crate::point::{draw_point_into, squared_norm};
use crate::{EstimateError, EstimatorConfig};

/// Outcome of one Monte Carlo run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Estimated volume of the n-ball.
    pub volume: f64,
    /// Points that landed inside the ball.
    pub accepted: u64,
    /// Points drawn in total.
    pub samples: u64,
    /// Volume of the enclosing hypercube.
    pub box_volume: f64,
}

impl Estimate {
    /// Fraction of samples that landed inside the ball.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn accept_fraction(&self) -> f64 {
        self.accepted as f64 / self.samples as f64
    }
}

impl std::fmt::Display for Estimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.volume)
    }
}

/// Estimates the volume of the ball of `config.radius` in `config.dimensions`
/// dimensions from `config.samples` uniform draws over its bounding hypercube.
///
/// The configuration is validated before the first draw, so an invalid
/// config never touches `source`.
///
/// # Errors
///
/// Any validation failure from [`EstimatorConfig::validate`].
#[allow(clippy::cast_precision_loss)]
pub fn estimate_volume<S: UniformSource + ?Sized>(
    config: &EstimatorConfig,
    source: &mut S,
) -> Result<Estimate, EstimateError> {
    config.validate()?;
    let interval = Interval::symmetric(config.radius)?;

    let mut point = vec![0.0; config.dimensions as usize];
    let mut accepted = 0u64;
    for _ in 0..config.samples {
        draw_point_into(source, interval, &mut point);
        if squared_norm(&point).sqrt() <= config.radius {
            accepted += 1;
        }
    }

    let box_volume = config.box_volume();
    let volume = box_volume * accepted as f64 / config.samples as f64;
    tracing::debug!(
        "Accepted {} of {} samples in {} dimensions (box volume {}).",
        accepted,
        config.samples,
        config.dimensions,
        box_volume
    );

    Ok(Estimate { volume, accepted, samples: config.samples, box_volume })
}
