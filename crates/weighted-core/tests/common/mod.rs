//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

pub const EPSILON: f64 = 1e-10;

/// Crop-yield weights for temperature, rainfall and humidity
pub const YIELD_WEIGHTS: [f64; 3] = [0.3, 0.2, 0.5];

/// Climate readings for five regions
pub fn regions() -> Vec<[f64; 3]> {
    vec![
        [73.0, 67.0, 43.0],
        [91.0, 88.0, 64.0],
        [87.0, 134.0, 58.0],
        [102.0, 43.0, 37.0],
        [69.0, 96.0, 70.0],
    ]
}

/// Expected apple yields for [`regions`]
pub fn expected_yields() -> Vec<f64> {
    vec![56.8, 76.9, 81.9, 57.7, 74.9]
}

/// Generate array lengths that test edge cases for SIMD operations
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // SSE width
        3,   // SSE width + 1
        4,   // AVX2 f64 width
        5,   // AVX2 f64 width + 1
        7,   // AVX2 width - 1 + remainder
        8,   // AVX2 f32 width / unrolled f64 step
        9,   // Unrolled step + 1
        12,  // Unrolled step + one half step
        15,  // Multiple of no SIMD width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        64,  // Cache line
        127, // Mersenne prime
        1000,
    ]
}

/// Assert two vectors are equal within tolerance
pub fn assert_vectors_equal(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch for {}",
        context
    );

    for (&a, &e) in actual.iter().zip(expected.iter()) {
        assert_relative_eq!(a, e, epsilon = EPSILON, max_relative = EPSILON);
    }
}

/// Generate test data with specific patterns
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len).map(|i| i as f64 + 0.1).collect()
}

/// Generate complementary test data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}
