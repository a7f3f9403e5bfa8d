//! AVX2 elementwise kernels for f64
//!
//! Each lane performs exactly the scalar operation on the same operands, so
//! results (signed zeros included) match the reference.
//! Multiply and add stay separate instructions: an FMA rounds once and would
//! not.

use std::arch::x86_64::*;

use super::LANES;
use crate::accumulate::common_prefix_len;

macro_rules! impl_inplace_binary {
    ($name:ident, $intrinsic:ident, $op:tt) => {
        /// In-place `dst[i] op= src[i]` over the common prefix
        #[target_feature(enable = "avx2")]
        pub unsafe fn $name(dst: &mut [f64], src: &[f64]) {
            let n = common_prefix_len([dst.len(), src.len()]);
            let chunks = n / LANES;
            let d_ptr = dst.as_mut_ptr();
            let s_ptr = src.as_ptr();

            for i in 0..chunks {
                let offset = i * LANES;
                let d = _mm256_loadu_pd(d_ptr.add(offset));
                let s = _mm256_loadu_pd(s_ptr.add(offset));
                _mm256_storeu_pd(d_ptr.add(offset), $intrinsic(d, s));
            }

            for i in chunks * LANES..n {
                dst[i] $op src[i];
            }
        }
    };
}

impl_inplace_binary!(add_f64, _mm256_add_pd, +=);
impl_inplace_binary!(div_f64, _mm256_div_pd, /=);

/// `x[i] += alpha`
#[target_feature(enable = "avx2")]
pub unsafe fn add_const_f64(alpha: f64, x: &mut [f64]) {
    let n = x.len();
    let chunks = n / LANES;
    let alpha_vec = _mm256_set1_pd(alpha);
    let ptr = x.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * LANES;
        let v = _mm256_loadu_pd(ptr.add(offset));
        _mm256_storeu_pd(ptr.add(offset), _mm256_add_pd(v, alpha_vec));
    }

    for v in &mut x[chunks * LANES..] {
        *v += alpha;
    }
}

/// `x[i] *= alpha`
#[target_feature(enable = "avx2")]
pub unsafe fn scale_f64(alpha: f64, x: &mut [f64]) {
    let n = x.len();
    let chunks = n / LANES;
    let alpha_vec = _mm256_set1_pd(alpha);
    let ptr = x.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * LANES;
        let v = _mm256_loadu_pd(ptr.add(offset));
        _mm256_storeu_pd(ptr.add(offset), _mm256_mul_pd(v, alpha_vec));
    }

    for v in &mut x[chunks * LANES..] {
        *v *= alpha;
    }
}

/// `y[i] += alpha * x[i]` over the common prefix
#[target_feature(enable = "avx2")]
pub unsafe fn axpy_f64(alpha: f64, x: &[f64], y: &mut [f64]) {
    let n = common_prefix_len([x.len(), y.len()]);
    let chunks = n / LANES;
    let alpha_vec = _mm256_set1_pd(alpha);
    let x_ptr = x.as_ptr();
    let y_ptr = y.as_mut_ptr();

    for i in 0..chunks {
        let offset = i * LANES;
        let xv = _mm256_loadu_pd(x_ptr.add(offset));
        let yv = _mm256_loadu_pd(y_ptr.add(offset));
        let prod = _mm256_mul_pd(alpha_vec, xv);
        _mm256_storeu_pd(y_ptr.add(offset), _mm256_add_pd(yv, prod));
    }

    for i in chunks * LANES..n {
        y[i] += alpha * x[i];
    }
}

/// `dst[i] = alpha * x[i] + y[i]` over the common prefix, returns it
#[target_feature(enable = "avx2")]
pub unsafe fn axpy_to_f64<'a>(dst: &'a mut [f64], alpha: f64, x: &[f64], y: &[f64]) -> &'a mut [f64] {
    let n = common_prefix_len([dst.len(), x.len(), y.len()]);
    let chunks = n / LANES;
    let alpha_vec = _mm256_set1_pd(alpha);
    let d_ptr = dst.as_mut_ptr();
    let x_ptr = x.as_ptr();
    let y_ptr = y.as_ptr();

    for i in 0..chunks {
        let offset = i * LANES;
        let xv = _mm256_loadu_pd(x_ptr.add(offset));
        let yv = _mm256_loadu_pd(y_ptr.add(offset));
        let prod = _mm256_mul_pd(alpha_vec, xv);
        _mm256_storeu_pd(d_ptr.add(offset), _mm256_add_pd(prod, yv));
    }

    for i in chunks * LANES..n {
        dst[i] = alpha * x[i] + y[i];
    }

    &mut dst[..n]
}

/// `dst[i] = x[i] / y[i]` over the common prefix, returns it
#[target_feature(enable = "avx2")]
pub unsafe fn div_to_f64<'a>(dst: &'a mut [f64], x: &[f64], y: &[f64]) -> &'a mut [f64] {
    let n = common_prefix_len([dst.len(), x.len(), y.len()]);
    let chunks = n / LANES;
    let d_ptr = dst.as_mut_ptr();
    let x_ptr = x.as_ptr();
    let y_ptr = y.as_ptr();

    for i in 0..chunks {
        let offset = i * LANES;
        let xv = _mm256_loadu_pd(x_ptr.add(offset));
        let yv = _mm256_loadu_pd(y_ptr.add(offset));
        _mm256_storeu_pd(d_ptr.add(offset), _mm256_div_pd(xv, yv));
    }

    for i in chunks * LANES..n {
        dst[i] = x[i] / y[i];
    }

    &mut dst[..n]
}
