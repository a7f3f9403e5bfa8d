//! Kernel primitives trait
//!
//! Every default method is the sequential reference implementation of its
//! kernel. Backends override a method only when their version returns the
//! same bits as the default for every input.

use crate::accumulate::{common_prefix_len, scaled_l2, Combine, MaxMagnitudeOp, ProductOp, SumOp};
use crate::stride::Stride;

/// Vector kernels over `f64` sequences
///
/// Multi-sequence kernels operate over the common prefix of their inputs
/// (see [`common_prefix_len`]); elements past it are neither read nor
/// written. Kernels returning a slice return the written prefix of `dst`.
pub trait KernelPrimitives: Clone + Copy + Send + Sync {
    /// Get the name of this backend
    fn backend_name(&self) -> &'static str;

    /// Number of `f64` lanes processed per step
    fn simd_width(&self) -> usize {
        1
    }

    /// Σ|x_i|
    fn abs_sum(&self, x: &[f64]) -> f64 {
        SumOp::fold(x.iter().map(|v| v.abs()))
    }

    /// Σx_i
    fn sum(&self, x: &[f64]) -> f64 {
        SumOp::fold(x.iter().copied())
    }

    /// Σx_i*y_i, multiply then add (never fused)
    fn dot(&self, x: &[f64], y: &[f64]) -> f64 {
        let n = common_prefix_len([x.len(), y.len()]);
        SumOp::fold(x[..n].iter().zip(&y[..n]).map(|(a, b)| a * b))
    }

    /// x_i += alpha
    fn add_const(&self, alpha: f64, x: &mut [f64]) {
        for v in x {
            *v += alpha;
        }
    }

    /// dst_i += src_i
    fn add(&self, dst: &mut [f64], src: &[f64]) {
        let n = common_prefix_len([dst.len(), src.len()]);
        for (d, s) in dst[..n].iter_mut().zip(&src[..n]) {
            *d += s;
        }
    }

    /// x_i *= alpha
    fn scale(&self, alpha: f64, x: &mut [f64]) {
        for v in x {
            *v *= alpha;
        }
    }

    /// y_i += alpha*x_i
    fn axpy(&self, alpha: f64, x: &[f64], y: &mut [f64]) {
        let n = common_prefix_len([x.len(), y.len()]);
        for (yi, xi) in y[..n].iter_mut().zip(&x[..n]) {
            *yi += alpha * xi;
        }
    }

    /// dst_i = alpha*x_i + y_i
    fn axpy_to<'a>(&self, dst: &'a mut [f64], alpha: f64, x: &[f64], y: &[f64]) -> &'a mut [f64] {
        let n = common_prefix_len([dst.len(), x.len(), y.len()]);
        let out = &mut dst[..n];
        for ((d, xi), yi) in out.iter_mut().zip(&x[..n]).zip(&y[..n]) {
            *d = alpha * xi + yi;
        }
        out
    }

    /// Running sum of `src` written into `dst`
    fn cum_sum<'a>(&self, dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
        SumOp::scan(dst, src)
    }

    /// Running product of `src` written into `dst`
    fn cum_prod<'a>(&self, dst: &'a mut [f64], src: &[f64]) -> &'a mut [f64] {
        ProductOp::scan(dst, src)
    }

    /// dst_i /= src_i
    fn div(&self, dst: &mut [f64], src: &[f64]) {
        let n = common_prefix_len([dst.len(), src.len()]);
        for (d, s) in dst[..n].iter_mut().zip(&src[..n]) {
            *d /= s;
        }
    }

    /// dst_i = x_i / y_i
    fn div_to<'a>(&self, dst: &'a mut [f64], x: &[f64], y: &[f64]) -> &'a mut [f64] {
        let n = common_prefix_len([dst.len(), x.len(), y.len()]);
        let out = &mut dst[..n];
        for ((d, xi), yi) in out.iter_mut().zip(&x[..n]).zip(&y[..n]) {
            *d = xi / yi;
        }
        out
    }

    /// Σ|s_i - t_i|
    fn l1_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        let n = common_prefix_len([s.len(), t.len()]);
        SumOp::fold(s[..n].iter().zip(&t[..n]).map(|(a, b)| (a - b).abs()))
    }

    /// max|s_i - t_i|, NaN sticky
    fn linf_norm(&self, s: &[f64], t: &[f64]) -> f64 {
        let n = common_prefix_len([s.len(), t.len()]);
        MaxMagnitudeOp::fold(s[..n].iter().zip(&t[..n]).map(|(a, b)| (a - b).abs()))
    }

    /// Euclidean norm of `x`, scaled against overflow
    fn l2_norm(&self, x: &[f64]) -> f64 {
        scaled_l2(x.iter().copied())
    }

    /// Euclidean norm of `s - t`
    fn l2_distance(&self, s: &[f64], t: &[f64]) -> f64 {
        let n = common_prefix_len([s.len(), t.len()]);
        scaled_l2(s[..n].iter().zip(&t[..n]).map(|(a, b)| a - b))
    }

    /// Σ|x_k| over the strided elements of `x`
    ///
    /// # Panics
    /// Panics if `x` is shorter than `stride.extent()`.
    #[track_caller]
    fn abs_sum_inc(&self, x: &[f64], stride: Stride) -> f64 {
        SumOp::fold(stride.iter(x).map(|v| v.abs()))
    }

    /// Σx_k over the strided elements of `x`
    #[track_caller]
    fn sum_inc(&self, x: &[f64], stride: Stride) -> f64 {
        SumOp::fold(stride.iter(x).copied())
    }

    /// Strided dot product over the common prefix of the two counts
    #[track_caller]
    fn dot_inc(&self, x: &[f64], sx: Stride, y: &[f64], sy: Stride) -> f64 {
        let n = common_prefix_len([sx.count(), sy.count()]);
        let (sx, sy) = (sx.truncate(n), sy.truncate(n));
        SumOp::fold(sx.iter(x).zip(sy.iter(y)).map(|(a, b)| a * b))
    }

    /// Euclidean norm of the strided elements of `x`
    #[track_caller]
    fn l2_norm_inc(&self, x: &[f64], stride: Stride) -> f64 {
        scaled_l2(stride.iter(x).copied())
    }

    /// x_k *= alpha over the strided elements of `x`
    #[track_caller]
    fn scale_inc(&self, alpha: f64, x: &mut [f64], stride: Stride) {
        for v in stride.iter_mut(x) {
            *v *= alpha;
        }
    }

    /// y_k += alpha*x_k over the common prefix of the two counts
    #[track_caller]
    fn axpy_inc(&self, alpha: f64, x: &[f64], sx: Stride, y: &mut [f64], sy: Stride) {
        let n = common_prefix_len([sx.count(), sy.count()]);
        let (sx, sy) = (sx.truncate(n), sy.truncate(n));
        for (yi, xi) in sy.iter_mut(y).zip(sx.iter(x)) {
            *yi += alpha * xi;
        }
    }
}
