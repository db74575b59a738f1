use hypersphere::{draw_point, estimate_volume, EstimateError, EstimatorConfig, MAX_DIMENSIONS};
use sampling::{SamplingError, SeededRng};

fn run(radius: f64, dimensions: u32, samples: u64) -> Result<f64, EstimateError> {
    let config = EstimatorConfig { radius, dimensions, samples };
    estimate_volume(&config, &mut SeededRng::with_seed(1)).map(|e| e.volume)
}

#[test]
fn zero_samples_is_rejected() {
    assert_eq!(run(1.0, 37, 0), Err(EstimateError::ZeroSamples));
}

#[test]
fn negative_radius_is_rejected() {
    assert_eq!(run(-1.0, 37, 10), Err(EstimateError::NonPositiveRadius(-1.0)));
}

#[test]
fn zero_dimensions_is_rejected() {
    assert_eq!(run(1.0, 0, 10), Err(EstimateError::ZeroDimensions));
}

#[test]
fn overflowing_box_volume_is_rejected_not_infinite() {
    let result = run(1.0, 2000, 10);
    assert!(matches!(result, Err(EstimateError::BoxVolumeOverflow { dimensions: 2000, .. })));
    assert!(matches!(run(1e150, 3, 10), Err(EstimateError::BoxVolumeOverflow { .. })));
}

#[test]
fn radius_whose_squares_overflow_is_rejected() {
    // Coordinates near 1e160 square to infinity, which would reject every sample.
    assert_eq!(
        run(1e160, 1, 10_000),
        Err(EstimateError::NormOverflow { radius: 1e160, dimensions: 1 })
    );
    let message = run(1e160, 1, 10).unwrap_err().to_string();
    assert!(message.contains("squared norm"), "{message}");
}

#[test]
fn largest_accepted_radius_still_estimates_correctly() {
    let volume = run(1e150, 1, 10_000).unwrap();
    assert!((volume / 2e150 - 1.0).abs() < 1e-12, "estimated {volume}");
}

#[test]
fn underflowing_box_volume_is_rejected_not_zero() {
    assert_eq!(
        run(0.25, 2000, 10),
        Err(EstimateError::BoxVolumeUnderflow { radius: 0.25, dimensions: 2000 })
    );
}

#[test]
fn dimension_count_is_capped() {
    assert_eq!(
        run(0.5, 4_000_000_000, 10),
        Err(EstimateError::TooManyDimensions { dimensions: 4_000_000_000, max: MAX_DIMENSIONS })
    );
}

#[test]
fn errors_render_descriptive_messages() {
    let message = run(-2.5, 3, 10).unwrap_err().to_string();
    assert!(message.contains("radius"), "{message}");
    assert!(message.contains("-2.5"), "{message}");

    let message = run(1.0, 3, 0).unwrap_err().to_string();
    assert!(message.contains("sample count"), "{message}");
}

#[test]
fn sampling_errors_pass_through() {
    let err = draw_point(&mut SeededRng::with_seed(1), 3, f64::NAN).unwrap_err();
    assert!(matches!(
        err,
        EstimateError::Sampling(SamplingError::InvalidRange { .. })
    ));
}
