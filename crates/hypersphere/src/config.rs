use crate::EstimateError;

/// Radius of the ball whose volume is estimated.
pub const DEFAULT_RADIUS: f64 = 1.0;
/// Dimension of the ambient space.
pub const DEFAULT_DIMENSIONS: u32 = 37;
/// Number of points drawn from the bounding hypercube.
pub const DEFAULT_SAMPLES: u64 = 100_000;
/// Largest accepted dimension. Bounds the per-sample coordinate buffer at 8 MiB.
pub const MAX_DIMENSIONS: u32 = 1 << 20;

/// Parameters of a single estimation run.
///
/// Fields are public so callers can build a config field by field, but
/// nothing downstream trusts them until [`EstimatorConfig::validate`] passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorConfig {
    pub radius: f64,
    pub dimensions: u32,
    pub samples: u64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            dimensions: DEFAULT_DIMENSIONS,
            samples: DEFAULT_SAMPLES,
        }
    }
}

impl EstimatorConfig {
    /// Builds and validates a config in one step.
    ///
    /// # Errors
    ///
    /// See [`EstimatorConfig::validate`].
    pub fn new(radius: f64, dimensions: u32, samples: u64) -> Result<Self, EstimateError> {
        let config = Self { radius, dimensions, samples };
        config.validate()?;
        Ok(config)
    }

    /// Checks every parameter before any sampling happens.
    ///
    /// # Errors
    ///
    /// - [`EstimateError::ZeroSamples`] when `samples == 0`
    /// - [`EstimateError::ZeroDimensions`] when `dimensions == 0`
    /// - [`EstimateError::TooManyDimensions`] above [`MAX_DIMENSIONS`]
    /// - [`EstimateError::NonPositiveRadius`] for `radius <= 0`, NaN or infinity
    /// - [`EstimateError::NormOverflow`] when `n * r^2`, the largest squared
    ///   norm a sample can have, is not finite
    /// - [`EstimateError::BoxVolumeOverflow`] when `(2r)^n` is not finite
    /// - [`EstimateError::BoxVolumeUnderflow`] when `(2r)^n` rounds to zero
    pub fn validate(&self) -> Result<(), EstimateError> {
        if self.samples == 0 {
            return Err(EstimateError::ZeroSamples);
        }
        if self.dimensions == 0 {
            return Err(EstimateError::ZeroDimensions);
        }
        if self.dimensions > MAX_DIMENSIONS {
            return Err(EstimateError::TooManyDimensions {
                dimensions: self.dimensions,
                max: MAX_DIMENSIONS,
            });
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(EstimateError::NonPositiveRadius(self.radius));
        }
        let (radius, dimensions) = (self.radius, self.dimensions);
        if !(radius * radius * f64::from(dimensions)).is_finite() {
            return Err(EstimateError::NormOverflow { radius, dimensions });
        }
        let box_volume = self.box_volume();
        if !box_volume.is_finite() {
            return Err(EstimateError::BoxVolumeOverflow { radius, dimensions });
        }
        if box_volume == 0.0 {
            return Err(EstimateError::BoxVolumeUnderflow { radius, dimensions });
        }
        Ok(())
    }

    /// Volume of the hypercube `[-r, r]^n`, i.e. `(2r)^n`.
    #[must_use]
    pub fn box_volume(&self) -> f64 {
        (2.0 * self.radius).powf(f64::from(self.dimensions))
    }
}
