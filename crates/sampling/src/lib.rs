#![deny(clippy::all, clippy::pedantic)]
//! # Sampling
//!
//! Random number plumbing for the Monte Carlo estimator.
//!
//! Every draw goes through an explicit [`UniformSource`] handed to the caller
//! by `&mut`, never through hidden global state. This keeps runs reproducible:
//! a [`SeededRng`] built from the same seed yields the same stream of values on
//! every platform.
//!
//! Use [`default_source`] to resolve a [`SeedSource`] into a generator. Fixed
//! seeds are used as-is; entropy seeds are drawn once and logged so that any
//! run can be replayed.

use thiserror::Error;

mod rng;

pub use rng::{default_source, SeedSource, SeededRng};

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SamplingError {
    #[error("invalid sampling interval [{lo}, {hi}]: bounds must be finite with lo < hi")]
    InvalidRange { lo: f64, hi: f64 },
}

/// A validated half-open interval `[lo, hi)` to sample from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// Creates an interval, rejecting non-finite bounds and `lo >= hi`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::InvalidRange`] when the bounds are unusable.
    pub fn new(lo: f64, hi: f64) -> Result<Self, SamplingError> {
        if lo.is_finite() && hi.is_finite() && lo < hi {
            Ok(Self { lo, hi })
        } else {
            Err(SamplingError::InvalidRange { lo, hi })
        }
    }

    /// The interval `[-half_width, half_width)`.
    ///
    /// # Errors
    ///
    /// Fails for a non-positive or non-finite `half_width`.
    pub fn symmetric(half_width: f64) -> Result<Self, SamplingError> {
        Self::new(-half_width, half_width)
    }

    #[must_use]
    pub const fn lo(&self) -> f64 {
        self.lo
    }

    #[must_use]
    pub const fn hi(&self) -> f64 {
        self.hi
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }
}

pub trait UniformSource {
    /// Returns the next value uniformly distributed on `[0, 1)` and advances
    /// the generator state.
    fn next_unit(&mut self) -> f64;

    /// Draws a value uniformly from `interval`.
    ///
    /// The result never exceeds `interval.hi()`, even when a unit value at
    /// the top of the range and a rounded-up width push the affine map past it.
    fn sample_uniform(&mut self, interval: Interval) -> f64 {
        let unit = self.next_unit();
        (interval.lo + interval.width() * unit).min(interval.hi)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Draws a single value uniformly from `[lo, hi)`.
///
/// # Errors
///
/// Returns [`SamplingError::InvalidRange`] unless `lo < hi` and both are finite.
pub fn sample_uniform<S: UniformSource + ?Sized>(
    source: &mut S,
    lo: f64,
    hi: f64,
) -> Result<f64, SamplingError> {
    let interval = Interval::new(lo, hi)?;
    Ok(source.sample_uniform(interval))
}
