//! Shared test infrastructure for sine-gradient integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use sine_gradient::GenerationParameters;

// ============================================================================
// Reference Computation
// ============================================================================

/// Recomputes sample `index` with std's `f64::sin`, independently of the library.
pub fn reference_sample(period: usize, frequency: f64, index: usize) -> f64 {
    let half = (period as f64 - 1.0) / 2.0;
    let angle = index as f64 / period as f64 * 2.0 * std::f64::consts::PI * frequency;
    (frequency * angle).sin() * half + half
}

pub fn params(period: usize, frequency: f64) -> GenerationParameters {
    GenerationParameters::new(period, frequency).unwrap()
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Compare two samples with floating-point tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    const EPSILON: f64 = 1e-9;
    (a - b).abs() < EPSILON
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgb, b: Srgb) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
}
