//! Shared utilities for integration tests

#![allow(dead_code, unused_imports)]

pub use vecops_core::guard::{same, same_slice, GuardConfig, Guarded, GuardedInc};

pub const NAN: f64 = f64::NAN;
pub const INF: f64 = f64::INFINITY;

/// Generate array lengths that test edge cases for SIMD operations
pub fn edge_case_lengths() -> Vec<usize> {
    vec![
        0,   // Empty
        1,   // Single element
        2,   // SSE width
        3,   // SSE width + 1
        4,   // AVX2 width
        5,   // AVX2 width + 1
        7,   // AVX2 width - 1 + remainder
        8,   // AVX512 width
        9,   // AVX512 width + 1
        15,  // Multiple of no SIMD width
        16,  // Power of 2
        17,  // Power of 2 + 1
        31,  // Prime
        32,  // Common cache line size / 8
        63,  // Almost cache line
        64,  // Cache line
        100, // Round number
        127, // Mersenne prime
        128, // Power of 2
    ]
}

/// Special floating-point values for edge case testing
pub fn special_values() -> Vec<f64> {
    vec![
        0.0,
        -0.0,
        1.0,
        -1.0,
        NAN,
        INF,
        -INF,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        -f64::MIN_POSITIVE,
        f64::EPSILON,
        std::f64::consts::PI,
        1e-308, // Near underflow
        1e308,  // Near overflow
    ]
}

/// Guard layout for the j-th table case: alternate 4 and 5 sentinels
pub fn guard_for(case: usize, sentinel: f64) -> GuardConfig {
    GuardConfig::default()
        .with_guard_len(4 + case % 2)
        .with_sentinel(sentinel)
}

/// Deterministic data mixing signs and magnitudes
pub fn generate_test_data(len: usize) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let v = i as f64 + 0.1;
            if i % 3 == 0 {
                -v
            } else {
                v
            }
        })
        .collect()
}

/// Complementary data for binary operations
pub fn generate_test_data_complement(len: usize) -> Vec<f64> {
    (0..len).map(|i| (len - i) as f64 + 0.2).collect()
}

/// Data with special values sprinkled at a fixed period
pub fn generate_special_data(len: usize, offset: usize) -> Vec<f64> {
    let specials = special_values();
    (0..len)
        .map(|i| {
            if (i + offset) % 5 == 0 {
                specials[(i + offset) / 5 % specials.len()]
            } else {
                (i as f64 - len as f64 / 2.0) * 0.75
            }
        })
        .collect()
}

/// Assert two result slices agree exactly, NaN matching NaN
pub fn assert_same_slice(actual: &[f64], expected: &[f64], context: &str) {
    assert_eq!(actual.len(), expected.len(), "{context}: length mismatch");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(same(a, e), "{context}: index {i} got {a}, expected {e}");
    }
}
