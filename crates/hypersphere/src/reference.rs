use std::f64::consts::PI;

/// Closed-form volume of the n-ball of `radius`.
///
/// Uses the recurrence `V(n) = V(n - 2) * 2 * pi * r^2 / n` seeded with
/// `V(0) = 1` and `V(1) = 2r`, which stays finite long after `(2r)^n` has
/// overflowed.
#[must_use]
pub fn exact_volume(dimensions: u32, radius: f64) -> f64 {
    let r2 = radius * radius;
    let (base, first) = if dimensions % 2 == 0 { (1.0, 2) } else { (2.0 * radius, 3) };
    (first..=dimensions)
        .step_by(2)
        .fold(base, |volume, n| volume * 2.0 * PI * r2 / f64::from(n))
}
