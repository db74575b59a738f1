use sampling::SamplingError;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    #[error("sample count must be positive")]
    ZeroSamples,
    #[error("dimension count must be positive")]
    ZeroDimensions,
    #[error("dimension count {dimensions} exceeds the supported maximum of {max}")]
    TooManyDimensions { dimensions: u32, max: u32 },
    #[error("radius must be a positive finite number, got {0}")]
    NonPositiveRadius(f64),
    #[error("bounding hypercube volume (2 * {radius})^{dimensions} overflows f64")]
    BoxVolumeOverflow { radius: f64, dimensions: u32 },
    #[error("bounding hypercube volume (2 * {radius})^{dimensions} underflows to zero")]
    BoxVolumeUnderflow { radius: f64, dimensions: u32 },
    #[error("squared norm {dimensions} * {radius}^2 overflows f64")]
    NormOverflow { radius: f64, dimensions: u32 },
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}
