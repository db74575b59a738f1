#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # Hypersphere Volume Estimator
//!
//! Monte Carlo estimation of the volume of an n-dimensional ball.
//!
//! Points are drawn uniformly from the bounding hypercube `[-r, r]^n`. The
//! fraction that lands within distance `r` of the origin, scaled by the
//! hypercube volume `(2r)^n`, estimates the ball's volume. The expected
//! relative error shrinks as `O(1 / sqrt(N))`.
//!
//! ## Key Components
//!
//! -   **Configuration:** [`EstimatorConfig`] holds radius, dimension and
//!     sample count with documented defaults in the [`config`] module. It is
//!     validated once before any sampling.
//! -   **Points:** [`draw_point`] and [`squared_norm`] in the [`point`]
//!     module build and measure individual samples.
//! -   **Estimation:** [`estimate_volume`] runs the sampling loop against any
//!     [`sampling::UniformSource`] and returns an [`Estimate`].
//! -   **Reference:** [`exact_volume`] gives the closed-form n-ball volume to
//!     compare estimates against.
//!
//! ## Usage
//!
//! ```rust
//! use hypersphere::{estimate_volume, EstimatorConfig};
//! use sampling::SeededRng;
//!
//! let config = EstimatorConfig::new(1.0, 2, 10_000)?;
//! let mut rng = SeededRng::with_seed(7);
//! let estimate = estimate_volume(&config, &mut rng)?;
//! assert!((estimate.volume - std::f64::consts::PI).abs() < 0.1);
//! # Ok::<(), hypersphere::EstimateError>(())
//! ```

pub mod config;
pub mod error;
pub mod estimator;
pub mod point;
pub mod reference;

pub use config::{
    EstimatorConfig, DEFAULT_DIMENSIONS, DEFAULT_RADIUS, DEFAULT_SAMPLES, MAX_DIMENSIONS,
};
pub use error::EstimateError;
pub use estimator::{estimate_volume, Estimate};
pub use point::{draw_point, draw_point_into, squared_norm};
pub use reference::exact_volume;
