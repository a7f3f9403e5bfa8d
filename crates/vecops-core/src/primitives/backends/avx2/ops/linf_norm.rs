//! AVX2 L∞ distance for f64
//!
//! The NaN-sticky maximum is order independent once NaN is handled apart:
//! without NaN, every lane holds magnitudes `>= +0.0` and the largest of
//! them is the same value whichever lane finds it. A chunk containing a NaN
//! ends the loop, and the scalar fold resumes from that chunk so the first
//! NaN in sequence order becomes the result, as in the reference.

use std::arch::x86_64::*;

use super::LANES;
use crate::accumulate::{common_prefix_len, Combine, MaxMagnitudeOp};
use crate::primitives::backends::avx2::utils::{abs_pd, any_nan_pd, store_lanes};

/// `max |s[i] - t[i]|` over the common prefix
#[target_feature(enable = "avx2")]
pub unsafe fn linf_norm_f64(s: &[f64], t: &[f64]) -> f64 {
    let n = common_prefix_len([s.len(), t.len()]);
    let chunks = n / LANES;
    let s_ptr = s.as_ptr();
    let t_ptr = t.as_ptr();

    let mut max_vec = _mm256_setzero_pd();
    let mut resume = chunks * LANES;

    for i in 0..chunks {
        let offset = i * LANES;
        let sv = _mm256_loadu_pd(s_ptr.add(offset));
        let tv = _mm256_loadu_pd(t_ptr.add(offset));
        let diff = abs_pd(_mm256_sub_pd(sv, tv));
        if any_nan_pd(diff) {
            resume = offset;
            break;
        }
        max_vec = _mm256_max_pd(max_vec, diff);
    }

    let acc = MaxMagnitudeOp::fold(store_lanes(max_vec));
    MaxMagnitudeOp::fold_from(
        acc,
        s[resume..n]
            .iter()
            .zip(&t[resume..n])
            .map(|(a, b)| (a - b).abs()),
    )
}
