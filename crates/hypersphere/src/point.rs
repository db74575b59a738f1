use sampling::{Interval, UniformSource};

use crate::EstimateError;

/// Draws one point uniformly from the hypercube `[-radius, radius]^dimensions`.
///
/// # Errors
///
/// Returns [`EstimateError::Sampling`] when `radius` is not a positive
/// finite number.
pub fn draw_point<S: UniformSource + ?Sized>(
    source: &mut S,
    dimensions: u32,
    radius: f64,
) -> Result<Vec<f64>, EstimateError> {
    let interval = Interval::symmetric(radius)?;
    let mut point = vec![0.0; dimensions as usize];
    draw_point_into(source, interval, &mut point);
    Ok(point)
}

/// Overwrites every coordinate of `point` with a fresh draw from `interval`.
pub fn draw_point_into<S: UniformSource + ?Sized>(
    source: &mut S,
    interval: Interval,
    point: &mut [f64],
) {
    for coord in point.iter_mut() {
        *coord = source.sample_uniform(interval);
    }
}

/// Sum of squared coordinates.
#[must_use]
pub fn squared_norm(point: &[f64]) -> f64 {
    point.iter().map(|x| x * x).sum()
}
