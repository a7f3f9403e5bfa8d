//! Shared utilities for AVX2 implementations

use std::arch::x86_64::*;

use super::ops::LANES;

/// Spill a register to an array in lane order
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn store_lanes(v: __m256d) -> [f64; LANES] {
    let mut lanes = [0.0; LANES];
    _mm256_storeu_pd(lanes.as_mut_ptr(), v);
    lanes
}

/// Clear the sign bit of every lane, matching `f64::abs`
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn abs_pd(v: __m256d) -> __m256d {
    _mm256_andnot_pd(_mm256_set1_pd(-0.0), v)
}

/// Whether any lane holds a NaN
#[inline]
#[target_feature(enable = "avx2")]
pub unsafe fn any_nan_pd(v: __m256d) -> bool {
    _mm256_movemask_pd(_mm256_cmp_pd::<_CMP_UNORD_Q>(v, v)) != 0
}
