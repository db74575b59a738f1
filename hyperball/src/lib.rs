//! # Hyperball
//!
//! Monte Carlo estimation of n-ball volumes.
//!
//! ## Overview
//!
//! The volume of the ball of radius `r` in `n` dimensions is estimated by
//! drawing points uniformly from the hypercube `[-r, r]^n`, counting how many
//! land within distance `r` of the origin and scaling that fraction by the
//! hypercube volume `(2r)^n`.
//!
//! ### The Crates
//!
//! -   **`hyperball`:** The crate you are currently viewing. It is the
//!     documentation entry point and the command-line executable, which parses
//!     flags, sets up logging and prints the estimate.
//! -   **[`sampling`]:** The random generator abstraction. Every draw goes
//!     through an explicit, seedable [`sampling::UniformSource`].
//! -   **[`hypersphere`]:** Configuration and validation, point drawing, the
//!     estimation loop and the closed-form reference volume.
//!
//! ## Command Line
//!
//! ```text
//! hyperball [--radius R] [--dimensions N] [--samples S] [--seed X] [--verbose]
//! ```
//!
//! Defaults are `R = 1`, `N = 37`, `S = 100000`. Invalid values exit with a
//! non-zero status and a message on stderr.

pub use hypersphere;
pub use sampling;
