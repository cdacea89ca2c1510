//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use tvmount::{
    DistanceStrategy, FieldOfView, MountingMode, ViewingInputs, config::InputLimits,
    float_types::Real,
};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Inputs for a `size`-inch TV seen from `eye_level_cm`, no manual distance.
pub fn inputs(size: u32, eye_level_cm: Real, strategy: DistanceStrategy, mode: MountingMode) -> ViewingInputs {
    ViewingInputs::new(strategy)
        .with_tv_size(size)
        .with_eye_level(eye_level_cm)
        .with_mounting_mode(mode)
}

/// Every TV size the input form accepts.
pub fn tv_sizes() -> impl Iterator<Item = u32> {
    let range = InputLimits::STANDARD.tv_size_inch;
    (range.min as u32)..=(range.max as u32)
}

/// Eye levels across the accepted range, in 5 cm steps.
pub fn eye_levels() -> impl Iterator<Item = Real> {
    let range = InputLimits::STANDARD.eye_level_cm;
    (0..)
        .map(move |i| range.min + 5.0 * i as Real)
        .take_while(move |cm| *cm <= range.max)
}

/// Every distance strategy, field-of-view ones first.
pub fn strategies() -> Vec<DistanceStrategy> {
    FieldOfView::ALL
        .into_iter()
        .map(DistanceStrategy::FieldOfView)
        .chain([DistanceStrategy::DiagonalHeuristic])
        .collect()
}
