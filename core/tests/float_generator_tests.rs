// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use random_mcp_core::{BoundArg, FloatGenerator, OsEntropy, RandomError, UniformSource};

// ============================================================
// Range containment
// ============================================================

#[test]
fn test_draws_stay_inside_inclusive_bounds() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    for _ in 0..10_000 {
        let value = generator
            .generate(
                BoundArg::Provided(-2.5),
                BoundArg::Provided(2.5),
                true,
                true,
            )
            .unwrap();
        assert!((-2.5..=2.5).contains(&value), "out of range: {}", value);
    }
}

#[test]
fn test_excluded_bounds_are_never_returned() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    for _ in 0..10_000 {
        let value = generator
            .generate(
                BoundArg::Provided(0.0),
                BoundArg::Provided(1.0),
                false,
                false,
            )
            .unwrap();
        assert!(value > 0.0, "excluded min returned: {}", value);
        assert!(value < 1.0, "excluded max returned: {}", value);
    }
}

#[test]
fn test_defaults_ignore_exclusivity_flags() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    // Nothing to exclude at an implicit default bound.
    let value = generator
        .generate(BoundArg::Default, BoundArg::Default, false, false)
        .unwrap();
    assert!((0.0..=f64::MAX).contains(&value));
}

// ============================================================
// Degenerate and adjacent ranges
// ============================================================

#[test]
fn test_degenerate_range_with_both_bounds_included_returns_the_point() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    for _ in 0..100 {
        let value = generator
            .generate(BoundArg::Provided(3.5), BoundArg::Provided(3.5), true, true)
            .unwrap();
        assert_eq!(value, 3.5);
    }
}

#[test]
fn test_degenerate_range_with_an_excluded_bound_is_empty() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    assert_eq!(
        generator.generate(BoundArg::Provided(3.5), BoundArg::Provided(3.5), false, true),
        Err(RandomError::EmptyRange)
    );
    assert_eq!(
        generator.generate(BoundArg::Provided(3.5), BoundArg::Provided(3.5), true, false),
        Err(RandomError::EmptyRange)
    );
}

#[test]
fn test_adjacent_floats_with_both_bounds_excluded_collapse_to_empty() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    let min = 1.0;
    let max = 1.0_f64.next_up();
    assert_eq!(
        generator.generate(
            BoundArg::Provided(min),
            BoundArg::Provided(max),
            false,
            false
        ),
        Err(RandomError::EmptyRange)
    );
}

#[test]
fn test_exclusion_steps_exactly_one_representable_value() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    // Excluding the lower of two adjacent representable values leaves a
    // single-point range at the upper one.
    let max = f64::MAX;
    let min = max.next_down();
    for _ in 0..100 {
        let value = generator
            .generate(BoundArg::Provided(min), BoundArg::Provided(max), false, true)
            .unwrap();
        assert_eq!(value, f64::MAX);
    }
}

// ============================================================
// Validation order and determinism
// ============================================================

#[test]
fn test_nan_bounds_are_rejected() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    assert_eq!(
        generator.generate(BoundArg::Provided(f64::NAN), BoundArg::Provided(1.0), true, true),
        Err(RandomError::NaNInput)
    );
    assert_eq!(
        generator.generate(BoundArg::Provided(0.0), BoundArg::Provided(f64::NAN), true, true),
        Err(RandomError::NaNInput)
    );
}

#[test]
fn test_infinite_bounds_are_rejected_before_range_order() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    // Positive infinity as min also inverts the range; the non-finite
    // check must win.
    assert_eq!(
        generator.generate(
            BoundArg::Provided(f64::INFINITY),
            BoundArg::Provided(0.0),
            true,
            true
        ),
        Err(RandomError::NonFiniteInput)
    );
    assert_eq!(
        generator.generate(
            BoundArg::Provided(0.0),
            BoundArg::Provided(f64::NEG_INFINITY),
            true,
            true
        ),
        Err(RandomError::NonFiniteInput)
    );
}

#[test]
fn test_inverted_range_is_rejected() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    assert_eq!(
        generator.generate(BoundArg::Provided(2.0), BoundArg::Provided(1.0), true, true),
        Err(RandomError::InvalidRange)
    );
}

#[test]
fn test_validation_failures_are_deterministic() {
    let uniform = UniformSource::new(OsEntropy);
    let generator = FloatGenerator::new(&uniform);

    // Interleave failing and succeeding calls; the failure never changes.
    for _ in 0..50 {
        assert_eq!(
            generator.generate(BoundArg::Provided(2.0), BoundArg::Provided(1.0), true, true),
            Err(RandomError::InvalidRange)
        );
        generator
            .generate(BoundArg::Provided(0.0), BoundArg::Provided(1.0), true, true)
            .unwrap();
    }
}
